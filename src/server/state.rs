//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use super::store::ItemStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The item collection
    pub store: Arc<ItemStore>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(ItemStore::new()))
    }

    /// Create state around an existing store
    pub fn with_store(store: Arc<ItemStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
