//! Shared application state for request handlers.

use std::sync::Arc;

use crate::store::MirrorStore;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Built once at startup and injected into every handler; there is no global
/// handle to the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MirrorStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn MirrorStore>) -> Self {
        Self { store }
    }
}
