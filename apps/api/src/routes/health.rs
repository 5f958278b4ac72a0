use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Static status payload; no side effects, no dependency on the upstream.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": "1.0.0"
    }))
}
