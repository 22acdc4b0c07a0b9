//! Reaction feasibility analysis.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /api/analysis/reaction`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequest {
    /// Reaction or process name
    #[serde(default)]
    pub input: Option<String>,
}

/// `POST /api/analysis/reaction`
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let Some(analyzer) = &state.analyzer else {
        return Err(ApiError::unavailable("Reaction analysis is not configured"));
    };

    match analyzer.analyze(request.input.as_deref().unwrap_or_default()).await {
        Ok(html) => Ok(Json(json!({ "html": html }))),
        Err(e) if e.is_client_error() => Err(ApiError::bad_request("Reaction description is required")),
        Err(e) => {
            tracing::error!(error = %e, "reaction analysis failed");
            Err(ApiError::internal("Analysis failed. Please try again later."))
        }
    }
}
