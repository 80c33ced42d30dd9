//! Cross-cutting HTTP layers: CORS, panic recovery and request tracing

use crate::types::MessageResponse;
use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Methods a browser may call cross-origin
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::DELETE];

/// Request headers a browser may send cross-origin
pub const ALLOWED_HEADERS: [HeaderName; 5] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::ACCEPT_ENCODING,
    header::AUTHORIZATION,
    HeaderName::from_static("x-forwarded-for"),
];

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Permissive CORS policy: every origin is mirrored back
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
}

/// Converts handler panics into a 500 JSON response
pub fn recovery_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

/// Logs each request and its outcome at info level
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new("internal server error")),
    )
        .into_response()
}
