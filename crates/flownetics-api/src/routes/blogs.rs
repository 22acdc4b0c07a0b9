//! Blog posts: public reads and admin management.

use axum::{Extension, Json};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use flownetics_auth::{AuthenticatedUser, actor_name};
use flownetics_core::{BlogPost, BlogSubmission, BlogUpdate, RecordId};
use serde_json::{Value, json};

use crate::error::{ApiError, OrInternal};
use crate::state::AppState;

const NOT_FOUND: &str = "Blog not found";
const SLUG_TAKEN: &str = "Blog with this slug already exists";

fn parse_blog_id(raw: &str) -> Result<RecordId, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found(NOT_FOUND))
}

/// `GET /api/blogs`, latest display date first.
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state
        .store
        .list_blogs_by_date()
        .await
        .or_internal("Failed to fetch blogs")?;
    Ok(Json(posts))
}

/// `GET /api/blogs/{slug}`
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .store
        .find_blog_by_slug(&slug)
        .await
        .or_internal("Failed to fetch blog")?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// `GET /api/admin/blogs`, newest first.
pub async fn list_admin(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state
        .store
        .list_blogs_by_creation()
        .await
        .or_internal("Failed to fetch blogs")?;
    Ok(Json(posts))
}

/// `POST /api/admin/blogs`
pub async fn create(
    State(state): State<AppState>,
    admin: Option<Extension<AuthenticatedUser>>,
    payload: Result<Json<BlogSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(submission) = payload?;
    let post = submission.validate(Utc::now())?;

    let taken = state
        .store
        .slug_taken(&post.slug, None)
        .await
        .or_internal("Failed to create blog")?;
    if taken {
        return Err(ApiError::conflict(SLUG_TAKEN));
    }

    let blog = state
        .store
        .insert_blog(post)
        .await
        .or_internal("Failed to create blog")?;

    tracing::info!(
        id = %blog.id,
        slug = %blog.slug,
        actor = actor_name(admin.as_deref()),
        "blog created"
    );
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": blog.id, "blog": blog })),
    ))
}

/// `PUT /api/admin/blogs/{id}`
///
/// Only non-empty fields change. A new slug must not belong to another post.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    admin: Option<Extension<AuthenticatedUser>>,
    payload: Result<Json<BlogUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_blog_id(&id)?;
    let Json(update) = payload?;
    let patch = update.into_patch();

    if let Some(slug) = &patch.slug {
        let taken = state
            .store
            .slug_taken(slug, Some(id))
            .await
            .or_internal("Failed to update blog")?;
        if taken {
            return Err(ApiError::conflict(SLUG_TAKEN));
        }
    }

    let matched = state
        .store
        .update_blog(id, &patch)
        .await
        .or_internal("Failed to update blog")?;
    if !matched {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!(%id, actor = actor_name(admin.as_deref()), "blog updated");
    Ok(Json(json!({ "success": true, "message": "Blog updated successfully" })))
}

/// `DELETE /api/admin/blogs/{id}`
///
/// Removes the cover image first; a failure there is logged and the post is
/// still deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    admin: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_blog_id(&id)?;
    let blog = state
        .store
        .find_blog(id)
        .await
        .or_internal("Failed to delete blog")?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    if !blog.image_id.is_empty() {
        match blog.image_id.parse::<RecordId>() {
            Ok(image_id) => {
                if let Err(e) = state.blobs.delete(image_id).await {
                    tracing::warn!(error = %e, %image_id, "failed to delete blog image");
                }
            }
            Err(_) => tracing::warn!(image_id = %blog.image_id, "blog references a malformed image id"),
        }
    }

    let removed = state
        .store
        .delete_blog(id)
        .await
        .or_internal("Failed to delete blog")?;
    if !removed {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!(%id, actor = actor_name(admin.as_deref()), "blog deleted");
    Ok(Json(json!({ "success": true, "message": "Blog deleted successfully" })))
}
