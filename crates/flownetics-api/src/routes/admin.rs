//! Admin login and dashboard listings.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use flownetics_core::{Contact, Lead, NewsletterSubscription, SiteStats};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{ApiError, OrInternal};
use crate::state::AppState;

/// Body of `POST /api/admin/login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    /// Admin username
    #[serde(default)]
    pub username: Option<String>,
    /// Plain-text password
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /api/admin/login`
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let (Some(username), Some(password)) = (request.username, request.password) else {
        return Err(ApiError::unauthorized("Invalid credentials"));
    };
    let Some(credentials) = &state.credentials else {
        tracing::warn!(username = %username, "login attempted but no admin password is configured");
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    // bcrypt verification is CPU-bound.
    let check = {
        let credentials = credentials.clone();
        let username = username.clone();
        tokio::task::spawn_blocking(move || credentials.verify(&username, &password))
    };
    if check.await.or_internal("Login failed")?.is_err() {
        tracing::warn!(username = %username, "admin login rejected");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.authority.issue(&username).or_internal("Login failed")?;
    tracing::info!(username = %username, "admin logged in");
    Ok(Json(json!({
        "success": true,
        "token": token,
        "expiresIn": state.authority.ttl_secs(),
    })))
}

/// `GET /api/admin/contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state
        .store
        .list_contacts()
        .await
        .or_internal("Failed to fetch contacts")?;
    Ok(Json(contacts))
}

/// `GET /api/admin/newsletters`
pub async fn list_newsletters(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsletterSubscription>>, ApiError> {
    let subscriptions = state
        .store
        .list_subscriptions()
        .await
        .or_internal("Failed to fetch newsletters")?;
    Ok(Json(subscriptions))
}

/// `GET /api/admin/roi-downloads`
pub async fn list_downloads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, ApiError> {
    let leads = state
        .store
        .list_leads()
        .await
        .or_internal("Failed to fetch downloads")?;
    Ok(Json(leads))
}

/// `GET /api/admin/stats`
pub async fn stats(State(state): State<AppState>) -> Result<Json<SiteStats>, ApiError> {
    let stats = state.store.stats().await.or_internal("Failed to fetch stats")?;
    Ok(Json(stats))
}
