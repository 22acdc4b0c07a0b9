//! ROI report delivery.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use flownetics_core::NewLead;
use flownetics_mail::OutgoingEmail;
use flownetics_report::{EMAIL_SUBJECT, ReportData};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of the report request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Lead's name, used in the greeting
    #[serde(default)]
    pub name: Option<String>,
    /// Where to send the report
    #[serde(default)]
    pub email: Option<String>,
    /// Calculator snapshot
    #[serde(default)]
    pub report_data: Option<ReportData>,
}

/// `POST /api/download-roi` and `POST /api/leads/roi-report`
///
/// Renders the report, emails it, then records the lead. The lead is only
/// stored once the provider accepted the message.
pub async fn send_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let name = request.name.filter(|v| !v.trim().is_empty());
    let email = request.email.filter(|v| !v.trim().is_empty());
    let (Some(name), Some(email), Some(data)) = (name, email, request.report_data) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };
    data.validate()
        .map_err(|e| ApiError::bad_request(format!("Invalid report data: {e}")))?;

    let document = flownetics_report::generate(&name, &data);
    let message = OutgoingEmail::new(&email, EMAIL_SUBJECT, document.email_html);

    let delivery = async {
        state.mailer.send(&message).await.map_err(|e| e.to_string())?;
        state
            .store
            .insert_lead(NewLead {
                name,
                email: email.clone(),
                report_data: data.snapshot(),
            })
            .await
            .map_err(|e| e.to_string())
    };

    match delivery.await {
        Ok(lead) => {
            tracing::info!(id = %lead.id, currency = %data.currency_code(), "ROI report sent");
            Ok(Json(json!({ "success": true, "message": "Email sent successfully" })))
        }
        Err(reason) => {
            tracing::error!(error = %reason, "ROI report delivery failed");
            Err(ApiError::internal(format!("Failed to send email: {reason}")))
        }
    }
}
