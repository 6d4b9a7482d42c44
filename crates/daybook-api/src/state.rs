//! Shared application state.

use std::sync::Arc;

use daybook_core::store::TaskStore;

/// Application state shared across all request handlers. The store handle is
/// injected at construction time; tests pass an in-memory store through the
/// same seam.
#[derive(Clone)]
pub struct AppState {
    /// Task store handle.
    pub store: Arc<dyn TaskStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}
