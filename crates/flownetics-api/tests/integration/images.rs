use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use flownetics_storage::BlobStore;

use crate::common::{TestApp, body_bytes, body_json, multipart_body};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

fn upload_request(app: &TestApp, field: &str) -> Request<Body> {
    let (content_type, body) = multipart_body(field, "cover.png", "image/png", PNG_BYTES);
    Request::post("/api/admin/blogs/upload-image")
        .header(header::AUTHORIZATION, format!("Bearer {}", app.admin_token()))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_upload_then_serve() {
    let app = TestApp::new();
    let response = app.send(upload_request(&app, "image")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let filename = body["filename"].as_str().unwrap();
    assert!(filename.starts_with("blog_"));
    assert!(filename.ends_with("_cover.png"));

    let image_id = body["imageId"].as_str().unwrap();
    let response = app
        .send(
            Request::get(format!("/api/blogs/images/{image_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000"
    );
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

#[tokio::test]
async fn test_upload_without_image_field() {
    let app = TestApp::new();
    let response = app.send(upload_request(&app, "attachment")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No image file provided");
    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn test_upload_requires_admin_token() {
    let app = TestApp::new();
    let (content_type, body) = multipart_body("image", "cover.png", "image/png", PNG_BYTES);
    let request = Request::post("/api/admin/blogs/upload-image")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    assert_eq!(app.send(request).await.status(), StatusCode::UNAUTHORIZED);
    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn test_missing_type_defaults_to_jpeg() {
    let app = TestApp::new();
    let id = app.blobs.put("blog_1_image", None, vec![9, 9]).await.unwrap();

    let response = app
        .send(
            Request::get(format!("/api/blogs/images/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
}

#[tokio::test]
async fn test_unknown_and_malformed_image_ids() {
    let app = TestApp::new();
    for id in [flownetics_core::RecordId::new().to_string(), "garbage".to_string()] {
        let (status, body) = app.get(&format!("/api/blogs/images/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Image not found");
    }
}
