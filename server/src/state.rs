//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the active pet store behind a trait object so handlers never know
//! whether they talk to the hosted table or the in-memory catalog.

use std::sync::Arc;

use crate::store::PetStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PetStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use super::AppState;
    use crate::store::memory::MemoryStore;

    /// State backed by the seeded sample catalog.
    pub fn seeded_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::seeded()))
    }
}
