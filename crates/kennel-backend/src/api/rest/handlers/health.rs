//! Liveness probe

use crate::types::MessageResponse;
use axum::Json;

/// Liveness check, independent of registry state
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}
