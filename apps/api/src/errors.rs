use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for every request-level failure.
pub const ANALYSIS_FAILED: &str = "Analysis failed. Please try again.";

/// Request-level failures. Per-section upstream errors never reach this type;
/// they are absorbed into fallback text by the section analyzer.
///
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidPayload(String),

    #[error("Section task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidPayload(msg) => tracing::error!("Rejected analysis payload: {msg}"),
            AppError::TaskFailed(e) => tracing::error!("Section task failed: {e}"),
        }

        let body = Json(json!({
            "success": false,
            "error": ANALYSIS_FAILED,
            "details": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
