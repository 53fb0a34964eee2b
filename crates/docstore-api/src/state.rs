//! Application state for the document store API

use std::sync::Arc;

use docstore_core::DocumentBackend;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentBackend>,
}

impl AppState {
    /// Create a new AppState backed by the given store
    pub fn new(store: Arc<dyn DocumentBackend>) -> Self {
        Self { store }
    }

    /// The document store
    pub fn store(&self) -> &Arc<dyn DocumentBackend> {
        &self.store
    }
}
