//! HTTP routes.
//!
//! Public endpoints live under `/api`; everything under `/api/admin` except
//! `login` sits behind the bearer-token layer.

pub mod admin;
pub mod analysis;
pub mod blogs;
pub mod contact;
pub mod health;
pub mod images;
pub mod newsletter;
pub mod reports;

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use flownetics_auth::AuthLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full API router.
pub fn router(state: AppState) -> Router {
    api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// The API router with a built frontend served for every other path.
///
/// Unknown paths fall back to `index.html` so client-side routes resolve.
pub fn router_with_static(state: AppState, static_dir: &Path) -> Router {
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    api_router(state)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/contact", post(contact::submit))
        .route("/api/newsletter", post(newsletter::subscribe))
        .route("/api/download-roi", post(reports::send_report))
        .route("/api/leads/roi-report", post(reports::send_report))
        .route("/api/analysis/reaction", post(analysis::analyze))
        .route("/api/blogs", get(blogs::list_public))
        .route("/api/blogs/images/{image_id}", get(images::get))
        .route("/api/blogs/{slug}", get(blogs::get_by_slug))
        .route("/api/admin/login", post(admin::login))
        .nest("/api/admin", admin_router(&state))
        .with_state(state)
}

fn admin_router(state: &AppState) -> Router<AppState> {
    let auth = AuthLayer::new(state.authority.clone(), state.auth_config.clone());
    Router::new()
        .route("/contacts", get(admin::list_contacts))
        .route("/newsletters", get(admin::list_newsletters))
        .route("/roi-downloads", get(admin::list_downloads))
        .route("/stats", get(admin::stats))
        .route("/blogs", get(blogs::list_admin).post(blogs::create))
        .route("/blogs/{id}", put(blogs::update).delete(blogs::delete))
        .route(
            "/blogs/upload-image",
            post(images::upload).layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        .route_layer(auth)
}
