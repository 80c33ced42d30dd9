//! API request handlers

mod dogs;
mod health;

pub use dogs::*;
pub use health::*;
