//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::api::{docs, AppState};
use crate::types::{Pet, PetId};

/// Health check with system status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        pets: state.store.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub pets: usize,
}

/// List every pet in insertion order
pub async fn list_pets(State(state): State<AppState>) -> Json<Vec<Pet>> {
    Json(state.store.list().await)
}

/// Fetch a single pet by id
///
/// A miss serializes as a JSON `null` with status 200; absence is reported
/// through the body, not the status code.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<PetId>,
) -> Json<Option<Pet>> {
    let pet = state.store.get(id).await;

    if pet.is_none() {
        tracing::debug!(id, "pet lookup missed");
    }

    Json(pet)
}

/// Create a new pet
///
/// The id is taken from the payload as-is; there is no uniqueness check.
pub async fn create_pet(State(state): State<AppState>, Json(pet): Json<Pet>) -> StatusCode {
    tracing::info!(id = pet.id, name = %pet.name, "Creating pet");

    state.store.create(pet).await;

    StatusCode::OK
}

/// Rename a pet
///
/// The request body is a bare JSON string, not an object. Responds with the
/// updated record, or `null` when no pet carries the id.
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<PetId>,
    Json(name): Json<String>,
) -> Json<Option<Pet>> {
    let updated = state.store.update_name(id, name).await;

    match &updated {
        Some(pet) => tracing::info!(id, name = %pet.name, "Renamed pet"),
        None => tracing::debug!(id, "rename target not found"),
    }

    Json(updated)
}

/// Serve the OpenAPI document
pub async fn openapi_document() -> Json<Value> {
    Json(docs::openapi_document())
}
