//! Kennel backend library
//!
//! This module provides the core components for the kennel registry service:
//! - REST API handlers and middleware
//! - In-memory dog storage
//! - Configuration loading
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod types;

pub use config::KennelConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
pub use storage::{DogStorage, InMemoryStorage};
pub use types::Dog;
