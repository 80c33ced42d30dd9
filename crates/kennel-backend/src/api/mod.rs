//! HTTP API for the kennel registry

pub mod rest;

pub use rest::create_router;
