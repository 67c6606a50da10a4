//! Petstore - a pet store API backed by an in-memory collection
//!
//! Petstore is a small HTTP service that keeps its data in process memory:
//! - A process-wide pet collection seeded with five stock entries
//! - List, fetch, create and rename operations over that collection
//! - A simple HTTP API with a served OpenAPI document

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
