//! Application state with repository-based storage.

use std::sync::Arc;

use pantry_core::storage::ItemRepository;

/// Shared application state.
///
/// This is cloned for each request handler and carries the repository trait
/// object every handler goes through for storage access.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates a new AppState over the given repository.
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}
