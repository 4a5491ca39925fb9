//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::models::{AnalysisResult, BusinessProfile};
use crate::analysis::orchestrator::run_analysis;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

/// POST /api/analyze-business
///
/// Runs all twelve sections for the posted profile. Upstream trouble shows up
/// as fallback text inside a 200; only a broken payload or a failed task
/// produces the 500 envelope.
pub async fn handle_analyze_business(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::InvalidPayload(e.body_text()))?;
    let profile = parse_profile(body)?;

    info!(
        "Analysis request received ({} of 10 profile fields provided)",
        profile.provided_fields()
    );

    let analysis = run_analysis(&state.analyzer, profile).await?;

    info!("All {} sections ready", analysis.len());

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

/// Only a JSON object is a profile. serde's derived visitor would also fill
/// the struct from an array by position.
fn parse_profile(body: Value) -> Result<BusinessProfile, AppError> {
    if !body.is_object() {
        return Err(AppError::InvalidPayload(
            "request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body).map_err(|e| AppError::InvalidPayload(e.to_string()))
}
