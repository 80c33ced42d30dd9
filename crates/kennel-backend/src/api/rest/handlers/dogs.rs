//! Dog registry handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::{Dog, MessageResponse};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// List all dogs
pub async fn list_dogs(State(state): State<AppState>) -> Json<Vec<Dog>> {
    Json(state.storage.list_dogs().await)
}

/// Get a specific dog
pub async fn get_dog(
    State(state): State<AppState>,
    Path(collar): Path<String>,
) -> ApiResult<Json<Dog>> {
    let dog = state
        .storage
        .get_dog(&collar)
        .await
        .ok_or(ApiError::NotFound(collar))?;

    Ok(Json(dog))
}

/// Delete a dog
pub async fn delete_dog(
    State(state): State<AppState>,
    Path(collar): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.storage.delete_dog(&collar).await {
        return Err(ApiError::NotFound(collar));
    }

    tracing::info!(collar = %collar, "Deleted dog");

    Ok(Json(MessageResponse::new(format!("dog '{}' deleted", collar))))
}

/// Register a dog, replacing any dog with the same collar
///
/// The body is decoded as JSON whatever its declared content type, and a
/// bare `null` body stands for a dog with every field zeroed. Success carries
/// no body.
pub async fn create_dog(State(state): State<AppState>, body: Bytes) -> ApiResult<StatusCode> {
    let dog = serde_json::from_slice::<Option<Dog>>(&body)
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to deserialize dog");
            ApiError::Deserialize(e.to_string())
        })?
        .unwrap_or_default();

    let collar = dog.collar.clone();
    let (alive, toes) = (dog.alive, dog.toes);

    state.storage.put_dog(dog).await;
    let registered = state.storage.count_dogs().await;

    tracing::info!(collar = %collar, alive, toes, registered, "New dog");

    Ok(StatusCode::OK)
}
