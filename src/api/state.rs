//! API server state

use std::sync::Arc;

use crate::store::{AlbumStore, InMemoryStore};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Album collection shared by every handler
    pub store: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store holding the seed catalogue
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryStore::seeded()))
    }
}
