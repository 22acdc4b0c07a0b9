//! Shared harness for the API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use flownetics_analysis::{ReactionAnalyzer, StaticGenerator, TextGenerator};
use flownetics_api::{AppState, router};
use flownetics_auth::{AdminCredentials, JwtAuthority, hash_password_with_cost};
use flownetics_mail::{Mailer, RecordingMailer};
use flownetics_storage::{BlobStore, DocumentStore, MemoryBlobStore, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery";
pub const ANALYSIS_RESPONSE: &str = "```html\n<h3>Feasibility</h3><p>Good fit for flow.</p>\n```";

/// Router plus handles on every fake it was built with.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub blobs: Arc<MemoryBlobStore>,
    pub mailer: Arc<RecordingMailer>,
    pub generator: Arc<StaticGenerator>,
    pub authority: Arc<JwtAuthority>,
}

pub struct TestAppBuilder {
    mailer: RecordingMailer,
    analysis: bool,
    credentials: bool,
}

impl TestAppBuilder {
    pub fn failing_mail(mut self, reason: &str) -> Self {
        self.mailer = RecordingMailer::failing(reason);
        self
    }

    pub fn without_analysis(mut self) -> Self {
        self.analysis = false;
        self
    }

    pub fn without_credentials(mut self) -> Self {
        self.credentials = false;
        self
    }

    pub fn build(self) -> TestApp {
        let store = Arc::new(MemoryStore::new());
        let blobs = Arc::new(MemoryBlobStore::new());
        let mailer = Arc::new(self.mailer);
        let generator = Arc::new(StaticGenerator::with_response(ANALYSIS_RESPONSE));
        let authority = Arc::new(JwtAuthority::new(b"integration-test-secret"));

        let dyn_store: Arc<dyn DocumentStore> = store.clone();
        let dyn_blobs: Arc<dyn BlobStore> = blobs.clone();
        let dyn_mailer: Arc<dyn Mailer> = mailer.clone();
        let mut state = AppState::new(dyn_store, dyn_blobs, dyn_mailer, authority.clone());

        if self.analysis {
            let dyn_generator: Arc<dyn TextGenerator> = generator.clone();
            state = state.with_analyzer(ReactionAnalyzer::new(dyn_generator));
        }
        if self.credentials {
            let hash = hash_password_with_cost(ADMIN_PASSWORD, 4).unwrap();
            state = state.with_credentials(AdminCredentials::new(ADMIN_USER, hash));
        }

        TestApp {
            router: router(state),
            store,
            blobs,
            mailer,
            generator,
            authority,
        }
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            mailer: RecordingMailer::new(),
            analysis: true,
            credentials: true,
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// A valid admin session token.
    pub fn admin_token(&self) -> String {
        self.authority.issue(ADMIN_USER).unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and decode the JSON body.
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.send(request).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body), None).await
    }

    pub async fn admin_get(&self, uri: &str) -> (StatusCode, Value) {
        let token = self.admin_token();
        self.call(Method::GET, uri, None, Some(&token)).await
    }

    pub async fn admin_send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let token = self.admin_token();
        self.call(method, uri, body, Some(&token)).await
    }
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Decode a JSON body; an empty body decodes as `null`.
pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// A `multipart/form-data` body with one file field.
pub fn multipart_body(
    field: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> (String, Vec<u8>) {
    let boundary = "flownetics-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}
