//! Blog image upload and delivery.

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use flownetics_core::RecordId;
use serde_json::{Value, json};

use crate::error::{ApiError, OrInternal};
use crate::state::AppState;

const IMAGE_NOT_FOUND: &str = "Image not found";
const NO_IMAGE: &str = "No image file provided";

/// Served when an image was stored without a MIME type.
pub const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

/// Images never change once stored.
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Name under which an upload is stored.
pub fn stored_filename(millis: i64, original: Option<&str>) -> String {
    let original = original
        .map(|name| name.rsplit(['/', '\\']).next().unwrap_or(name))
        .filter(|name| !name.is_empty())
        .unwrap_or("image");
    format!("blog_{millis}_{original}")
}

/// `POST /api/admin/blogs/upload-image`, multipart field `image`.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    let mut multipart = multipart.map_err(|_| ApiError::bad_request(NO_IMAGE))?;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::bad_request(NO_IMAGE)),
            Err(e) => return Err(ApiError::new(e.status(), e.body_text())),
        };
        if field.name() != Some("image") {
            continue;
        }

        let filename = stored_filename(Utc::now().timestamp_millis(), field.file_name());
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        if data.is_empty() {
            return Err(ApiError::bad_request(NO_IMAGE));
        }

        let image_id = state
            .blobs
            .put(&filename, content_type.as_deref(), data.to_vec())
            .await
            .or_internal("Failed to upload image")?;

        tracing::info!(%image_id, filename = %filename, bytes = data.len(), "blog image stored");
        return Ok(Json(json!({
            "success": true,
            "imageId": image_id,
            "filename": filename,
        })));
    }
}

/// `GET /api/blogs/images/{imageId}`
pub async fn get(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Response, ApiError> {
    let id: RecordId = image_id
        .parse()
        .map_err(|_| ApiError::not_found(IMAGE_NOT_FOUND))?;
    let image = state
        .blobs
        .get(id)
        .await
        .or_internal("Failed to retrieve image")?
        .ok_or_else(|| ApiError::not_found(IMAGE_NOT_FOUND))?;

    let content_type = image
        .content_type
        .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL.to_string()),
        ],
        Body::from(image.data),
    )
        .into_response())
}
