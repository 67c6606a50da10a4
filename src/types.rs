//! Core types for petstore

use serde::{Deserialize, Serialize};

/// Pet ID type
///
/// Ids are caller-supplied and never checked for uniqueness or positivity;
/// lookups over duplicates resolve to the first-inserted match.
pub type PetId = i64;

/// Pet represents a single record in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
}

impl Pet {
    pub fn new(id: PetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
