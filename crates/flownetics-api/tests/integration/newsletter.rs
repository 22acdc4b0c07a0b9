use axum::http::StatusCode;
use flownetics_storage::DocumentStore;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_subscribe_then_duplicate_conflicts() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/newsletter", json!({ "email": "reader@example.com" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, body) = app
        .post("/api/newsletter", json!({ "email": "reader@example.com" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already subscribed");

    assert_eq!(app.store.list_subscriptions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_subscribe_requires_email() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/newsletter", json!({ "email": "  " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
    assert_eq!(app.store.stats().await.unwrap().newsletters, 0);
}
