//! Shared application state for the API server.
//!
//! [`AppState`] owns the single [`ItemStore`] instance for the process.
//! The store is constructed empty at startup, injected into the router
//! via Axum's `State` extractor, and discarded when the process exits --
//! nothing is persisted.

use std::sync::Arc;

use tasklist_store::ItemStore;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. All
/// store operations are serialized through the one read-write lock:
/// reads (`get`, `list`) take the read guard, appends take the write
/// guard. The store has no interior synchronization of its own.
#[derive(Clone)]
pub struct AppState {
    /// The item store, behind the process's single exclusive lock.
    pub store: Arc<RwLock<ItemStore>>,
}

impl AppState {
    /// Create a new application state with an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(ItemStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
