//! Newsletter signup.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use flownetics_core::NewsletterSubmission;
use serde_json::{Value, json};

use crate::error::{ApiError, OrInternal};
use crate::state::AppState;

/// `POST /api/newsletter`
///
/// An address already on the list is a conflict and is not stored again.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<NewsletterSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(submission) = payload?;
    let email = submission.validate()?;

    let existing = state
        .store
        .find_subscription(&email)
        .await
        .or_internal("Failed to subscribe")?;
    if existing.is_some() {
        return Err(ApiError::conflict("Email already subscribed"));
    }

    let stored = state
        .store
        .insert_subscription(&email)
        .await
        .or_internal("Failed to subscribe")?;

    tracing::info!(id = %stored.id, "newsletter signup stored");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": stored.id })),
    ))
}
