/// Shared application state
use std::sync::Arc;
use user_core::UserRepository;
use user_storage::InMemoryUserStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserRepository>) -> Self {
        Self { store }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
