use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check; answers without touching any downstream dependency.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Backend is running!" }))
}
