//! Storage layer for kennel-backend
//!
//! The registry lives in process memory only.

mod memory;
mod traits;

pub use memory::InMemoryStorage;
pub use traits::DogStorage;
