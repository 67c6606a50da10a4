//! API server state

use std::sync::Arc;

use crate::store::PetStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Shared pet store; owned by the process, not the request, so
    /// mutations survive across requests
    pub store: Arc<PetStore>,
}

impl AppState {
    /// Create state around an existing store
    pub fn new(store: Arc<PetStore>) -> Self {
        Self { store }
    }

    /// Create state backed by the stock seed data
    pub fn seeded() -> Self {
        Self::new(Arc::new(PetStore::seeded()))
    }
}
