//! Application state for API handlers

use crate::storage::{DogStorage, InMemoryStorage};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Dog registry
    pub storage: Arc<dyn DogStorage>,
}

impl AppState {
    /// Create new application state
    pub fn new(storage: Arc<dyn DogStorage>) -> Self {
        Self { storage }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStorage::new()))
    }
}
