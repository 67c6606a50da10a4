//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::PetStore;

pub mod docs;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/swagger/v1/swagger.json", get(handlers::openapi_document))
        .route(
            "/petstore",
            get(handlers::list_pets).post(handlers::create_pet),
        )
        .route(
            "/petstore/:id",
            get(handlers::get_pet).put(handlers::update_pet),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Convenience helper wiring an existing store into a router
pub fn create_store_router(store: Arc<PetStore>) -> Router {
    create_router(AppState::new(store))
}
