//! HTTP route handlers for the parse gateway.
//!
//! The parse endpoint invokes the external parser per request, so its
//! responses carry a no-store Cache-Control header; the health endpoint is
//! left uncached for liveness probes.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod parse;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PARSE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Parse results are per-request, never cacheable
    let parse_routes = Router::new()
        .route("/parse/{id}", post(parse::parse))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PARSE),
        ));

    // Health check - always fresh for liveness probes
    let health_routes = Router::new().route("/ping", get(health::ping));

    Router::new()
        .merge(parse_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
