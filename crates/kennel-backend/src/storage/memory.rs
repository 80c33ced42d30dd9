//! In-memory storage implementation

use super::traits::DogStorage;
use crate::types::Dog;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory dog registry, lost on restart
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    dogs: Arc<RwLock<HashMap<String, Dog>>>,
}

impl InMemoryStorage {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DogStorage for InMemoryStorage {
    async fn list_dogs(&self) -> Vec<Dog> {
        let dogs = self.dogs.read().await;
        dogs.values().cloned().collect()
    }

    async fn get_dog(&self, collar: &str) -> Option<Dog> {
        let dogs = self.dogs.read().await;
        dogs.get(collar).cloned()
    }

    async fn put_dog(&self, dog: Dog) {
        let mut dogs = self.dogs.write().await;
        dogs.insert(dog.collar.clone(), dog);
    }

    async fn delete_dog(&self, collar: &str) -> bool {
        let mut dogs = self.dogs.write().await;
        dogs.remove(collar).is_some()
    }

    async fn count_dogs(&self) -> usize {
        self.dogs.read().await.len()
    }
}
