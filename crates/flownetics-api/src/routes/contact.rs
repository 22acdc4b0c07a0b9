//! Contact form.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use flownetics_core::ContactSubmission;
use serde_json::{Value, json};

use crate::error::{ApiError, OrInternal};
use crate::state::AppState;

/// `POST /api/contact`
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(submission) = payload?;
    let contact = submission.validate()?;

    let stored = state
        .store
        .insert_contact(contact)
        .await
        .or_internal("Failed to submit contact form")?;

    tracing::info!(id = %stored.id, "contact form stored");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": stored.id })),
    ))
}
