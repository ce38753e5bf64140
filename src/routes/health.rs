//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::response::Json;
use serde_json::{json, Value};

/// Health check handler.
///
/// Always returns `{"ok": true}`. This is a liveness probe - it only checks
/// that the process can respond to HTTP, not that the parser tool works.
pub async fn ping() -> Json<Value> {
    Json(json!({ "ok": true }))
}
