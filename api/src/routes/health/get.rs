use axum::{Json, response::IntoResponse};
use serde_json::json;

/// GET /health
///
/// Liveness check; carries no state.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
