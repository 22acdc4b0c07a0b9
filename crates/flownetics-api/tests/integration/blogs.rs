use axum::http::{Method, StatusCode};
use flownetics_core::models::{DEFAULT_AUTHOR, DEFAULT_READ_TIME};
use flownetics_storage::{BlobStore, DocumentStore};
use serde_json::{Value, json};

use crate::common::TestApp;

fn post(slug: &str, date: &str) -> Value {
    json!({
        "title": format!("Scaling {slug}"),
        "excerpt": "Short teaser",
        "content": "<p>Body</p>",
        "category": "Engineering",
        "date": date,
        "slug": slug,
        "imageId": "not-uploaded"
    })
}

async fn create(app: &TestApp, body: Value) -> (StatusCode, Value) {
    app.admin_send(Method::POST, "/api/admin/blogs", Some(body)).await
}

#[tokio::test]
async fn test_create_fills_defaults() {
    let app = TestApp::new();
    let mut body = post("flow-101", "2025-03-01");
    body.as_object_mut().unwrap().remove("date");

    let (status, created) = create(&app, body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["blog"]["author"], DEFAULT_AUTHOR);
    assert_eq!(created["blog"]["readTime"], DEFAULT_READ_TIME);
    assert_eq!(created["blog"]["_id"], created["id"]);
    assert!(created["blog"]["date"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_requires_fields() {
    let app = TestApp::new();
    let mut body = post("flow-101", "2025-03-01");
    body["title"] = json!("");

    let (status, created) = create(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(created["error"], "Missing required fields");
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let app = TestApp::new();
    assert_eq!(create(&app, post("dup", "2025-01-01")).await.0, StatusCode::CREATED);

    let (status, body) = create(&app, post("dup", "2025-02-01")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Blog with this slug already exists");
    assert_eq!(app.store.stats().await.unwrap().blogs, 1);
}

#[tokio::test]
async fn test_public_list_and_lookup() {
    let app = TestApp::new();
    create(&app, post("older", "2024-05-01")).await;
    create(&app, post("newer", "2025-05-01")).await;

    let (status, list) = app.get("/api/blogs").await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["newer", "older"]);

    let (status, blog) = app.get("/api/blogs/older").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(blog["title"], "Scaling older");

    let (status, body) = app.get("/api/blogs/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog not found");
}

#[tokio::test]
async fn test_admin_list_newest_created_first() {
    let app = TestApp::new();
    create(&app, post("first", "2025-12-01")).await;
    create(&app, post("second", "2020-01-01")).await;

    let (status, list) = app.admin_get("/api/admin/blogs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["slug"], "second");
    assert_eq!(list[1]["slug"], "first");
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let app = TestApp::new();
    let (_, created) = create(&app, post("edit-me", "2025-01-01")).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .admin_send(
            Method::PUT,
            &format!("/api/admin/blogs/{id}"),
            Some(json!({ "title": "Renamed", "excerpt": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Blog updated successfully" }));

    let (_, blog) = app.get("/api/blogs/edit-me").await;
    assert_eq!(blog["title"], "Renamed");
    assert_eq!(blog["excerpt"], "Short teaser");
}

#[tokio::test]
async fn test_update_slug_conflict_and_same_slug() {
    let app = TestApp::new();
    create(&app, post("taken", "2025-01-01")).await;
    let (_, created) = create(&app, post("mine", "2025-01-02")).await;
    let uri = format!("/api/admin/blogs/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .admin_send(Method::PUT, &uri, Some(json!({ "slug": "taken" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Blog with this slug already exists");

    let (status, _) = app
        .admin_send(Method::PUT, &uri, Some(json!({ "slug": "mine" })))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_unknown_or_malformed_id() {
    let app = TestApp::new();
    let unknown = flownetics_core::RecordId::new();

    let (status, body) = app
        .admin_send(
            Method::PUT,
            &format!("/api/admin/blogs/{unknown}"),
            Some(json!({ "title": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog not found");

    let (status, _) = app
        .admin_send(Method::PUT, "/api/admin/blogs/not-an-id", Some(json!({ "title": "x" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_post_and_image() {
    let app = TestApp::new();
    let image_id = app
        .blobs
        .put("blog_1_cover.png", Some("image/png"), vec![1, 2, 3])
        .await
        .unwrap();
    let mut body = post("doomed", "2025-01-01");
    body["imageId"] = json!(image_id.to_string());
    let (_, created) = create(&app, body).await;
    let uri = format!("/api/admin/blogs/{}", created["id"].as_str().unwrap());

    let (status, body) = app.admin_send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Blog deleted successfully" }));
    assert!(app.blobs.is_empty().await);
    assert_eq!(app.get("/api/blogs/doomed").await.0, StatusCode::NOT_FOUND);

    let (status, _) = app.admin_send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_tolerates_dangling_image_reference() {
    let app = TestApp::new();
    let (_, created) = create(&app, post("dangling", "2025-01-01")).await;
    let uri = format!("/api/admin/blogs/{}", created["id"].as_str().unwrap());

    let (status, _) = app.admin_send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.store.stats().await.unwrap().blogs, 0);
}
