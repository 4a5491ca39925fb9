use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "marshall-api",
        "apiKeyConfigured": state.config.has_api_key()
    }))
}

/// GET /api/test
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "API is working!" }))
}
