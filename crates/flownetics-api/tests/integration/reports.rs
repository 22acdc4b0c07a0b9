use axum::http::StatusCode;
use flownetics_report::EMAIL_SUBJECT;
use flownetics_storage::DocumentStore;
use serde_json::{Value, json};

use crate::common::TestApp;

fn report_data() -> Value {
    json!({
        "currency": "USD",
        "currencySymbol": "$",
        "annualQtyTons": 120.0,
        "volumeTonsPerMonth": 10.0,
        "totalCostClientINR": 25000000.0,
        "savingsAfterFaasINR": 8300000.0,
        "savingsRmPerKgINR": 42.5,
        "numSteps": 4,
        "faasPercent": 20,
        "roiMonths": 14.5
    })
}

#[tokio::test]
async fn test_report_emailed_then_lead_stored() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/download-roi",
            json!({ "name": "Asha Rao", "email": "asha@example.com", "reportData": report_data() }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Email sent successfully" }));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "asha@example.com");
    assert_eq!(sent[0].subject, EMAIL_SUBJECT);
    assert!(sent[0].html.contains("Dear Asha Rao,"));

    let leads = app.store.list_leads().await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Asha Rao");
    assert_eq!(leads[0].report_data.currency.as_deref(), Some("USD"));
    assert_eq!(leads[0].report_data.roi_months, Some(14.5));
}

#[tokio::test]
async fn test_report_alias_route() {
    let app = TestApp::new();
    let (status, _) = app
        .post(
            "/api/leads/roi-report",
            json!({ "name": "Asha", "email": "asha@example.com", "reportData": report_data() }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_report_missing_fields() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/api/download-roi", json!({ "name": "Asha", "reportData": report_data() }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_report_invalid_data_rejected() {
    let app = TestApp::new();
    let mut data = report_data();
    data["roiMonths"] = json!(-3);

    let (status, body) = app
        .post(
            "/api/download-roi",
            json!({ "name": "Asha", "email": "asha@example.com", "reportData": data }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid report data:"));
    assert!(app.mailer.sent().is_empty());
    assert_eq!(app.store.stats().await.unwrap().downloads, 0);
}

#[tokio::test]
async fn test_mail_failure_stores_no_lead() {
    let app = TestApp::builder().failing_mail("domain not verified").build();
    let (status, body) = app
        .post(
            "/api/download-roi",
            json!({ "name": "Asha", "email": "asha@example.com", "reportData": report_data() }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to send email: "));
    assert!(message.contains("domain not verified"));
    assert_eq!(app.store.stats().await.unwrap().downloads, 0);
}
