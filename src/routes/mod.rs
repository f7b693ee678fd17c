//! HTTP route handlers.
//!
//! Stateful responses carry `Cache-Control: no-store`; the OpenAPI document is
//! fixed for the process lifetime and may be cached briefly.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod dave;
pub mod openapi;
pub mod root;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, CACHE_CONTROL_OPENAPI};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for unknown paths.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Root status and the improvement endpoint - never cached
    let api_routes = Router::new()
        .route("/", get(root::root))
        // Input text is unbounded, so the body is too
        .route("/dave", post(dave::dave).layer(DefaultBodyLimit::disable()))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // OpenAPI document - immutable after startup
    let openapi_routes = Router::new()
        .route("/openapi.json", get(openapi::document))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_OPENAPI),
        ));

    Router::new()
        .merge(api_routes)
        .merge(openapi_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
