//! HTTP route handlers for the JSON API.
//!
//! Every route lives under `/api`. Unknown paths, wrong methods and handler
//! panics all answer with the same `{"error": ...}` JSON shape as the handlers.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod history;
pub mod mirror;

use std::any::Any;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for paths with no route.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths requested with an unsupported method.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Convert a handler panic into a generic 500 response.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(detail).into_response()
}

/// Creates the Axum router with all routes, fallbacks and middleware.
pub fn create_router(state: AppState) -> Router {
    // Mirror and history - never cached, every call is recorded or reads fresh data
    let api_routes = Router::new()
        .route("/api/mirror", get(mirror::mirror))
        .route("/api/history", get(history::list))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Health check - liveness probe, independent of the database
    let health_routes = Router::new().route("/api/health", get(health::health));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        // Panic recovery - turns unhandled faults into a JSON 500
        .layer(CatchPanicLayer::custom(handle_panic))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
