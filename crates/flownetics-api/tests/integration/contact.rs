use axum::http::StatusCode;
use flownetics_storage::DocumentStore;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_contact_stored() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/contact",
            json!({
                "firstName": "Asha",
                "lastName": "Rao",
                "email": "asha@example.com",
                "company": "Rao Pharma",
                "message": "Interested in a pilot."
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let contacts = app.store.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id.to_string(), body["id"].as_str().unwrap());
    assert_eq!(contacts[0].company, "Rao Pharma");
    assert_eq!(contacts[0].phone, "");
}

#[tokio::test]
async fn test_contact_missing_fields_rejected() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/api/contact", json!({ "firstName": "Asha", "email": "asha@example.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(app.store.stats().await.unwrap().contacts, 0);
}

#[tokio::test]
async fn test_contact_blank_fields_rejected() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/contact",
            json!({ "firstName": "   ", "lastName": "Rao", "email": "asha@example.com" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(app.store.stats().await.unwrap().contacts, 0);
}

#[tokio::test]
async fn test_contact_malformed_json_rejected() {
    let app = TestApp::new();
    let request = axum::http::Request::post("/api/contact")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = crate::common::body_json(response).await;
    assert!(body["error"].is_string());
}
