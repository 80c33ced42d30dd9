//! Storage trait definitions

use crate::types::Dog;
use async_trait::async_trait;

/// Keyed store of dog records
#[async_trait]
pub trait DogStorage: Send + Sync {
    /// List all dogs, in no particular order
    async fn list_dogs(&self) -> Vec<Dog>;

    /// Get a dog by collar
    async fn get_dog(&self, collar: &str) -> Option<Dog>;

    /// Insert a dog, replacing any record with the same collar
    async fn put_dog(&self, dog: Dog);

    /// Delete a dog by collar, returning whether one was removed
    async fn delete_dog(&self, collar: &str) -> bool;

    /// Number of stored dogs
    async fn count_dogs(&self) -> usize;
}
