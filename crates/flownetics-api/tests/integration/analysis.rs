use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_analysis_strips_fences() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/api/analysis/reaction", json!({ "input": "Nitration of toluene" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["html"], "<h3>Feasibility</h3><p>Good fit for flow.</p>");

    let prompts = app.generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Nitration of toluene"));
}

#[tokio::test]
async fn test_analysis_blank_input_never_reaches_model() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/analysis/reaction", json!({ "input": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Reaction description is required");
    assert!(app.generator.prompts().is_empty());
}

#[tokio::test]
async fn test_analysis_unconfigured() {
    let app = TestApp::builder().without_analysis().build();
    let (status, body) = app
        .post("/api/analysis/reaction", json!({ "input": "Suzuki coupling" }))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Reaction analysis is not configured");
}
