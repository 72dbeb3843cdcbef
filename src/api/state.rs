//! Application state for the Vacation Allocation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::PeriodStore;

/// Shared application state.
///
/// Contains the period store shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<PeriodStore>,
}

impl AppState {
    /// Creates a new application state with an empty period store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(PeriodStore::new()),
        }
    }

    /// Returns a reference to the period store.
    pub fn store(&self) -> &PeriodStore {
        &self.store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
