//! API Router configuration

use super::handlers;
use super::middleware::{cors_layer, recovery_layer, trace_layer};
use super::state::AppState;
use axum::{routing::get, Router};

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    // Request tracing only wraps the registry routes, the probe stays quiet
    let dog_routes = Router::new()
        .route("/dogs", get(handlers::list_dogs).post(handlers::create_dog))
        .route(
            "/dog/:collar",
            get(handlers::get_dog).delete(handlers::delete_dog),
        )
        .layer(trace_layer());

    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(dog_routes)
        .layer(recovery_layer())
        .layer(cors_layer())
        .with_state(state)
}
