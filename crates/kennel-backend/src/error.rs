//! Error types for kennel-backend

use crate::types::MessageResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::net::SocketAddr;
use thiserror::Error;

/// Process-level errors, all fatal
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server runtime error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level errors, converted into JSON responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// No dog is registered under the collar
    #[error("dog '{0}' not found")]
    NotFound(String),

    /// Request body could not be decoded into a dog
    #[error("failed to deserialize")]
    Deserialize(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Deserialize(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            ApiError::Deserialize(detail) => MessageResponse::with_error(self.to_string(), detail),
            ApiError::NotFound(_) => MessageResponse::new(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;
