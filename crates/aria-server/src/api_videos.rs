//! Video library handlers: listing and raw-body upload.

use crate::{api::ApiError, AppState};
use axum::{
    body::Bytes,
    extract::{Extension, Json},
    http::{header, HeaderMap},
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Handler for `GET /self-hosted-videos`.
pub async fn list_videos_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let videos = state
        .store
        .list_videos()
        .await
        .map_err(|e| ApiError::InternalServerError(format!("failed to list videos: {}", e)))?;
    Ok(Json(json!({ "videos": videos })))
}

/// Handler for `POST /upload-video`.
///
/// The body is the raw video and the declared `Content-Type` is trusted for
/// the file extension — there is no content sniffing. That trust boundary
/// is intentional; the library is operator-curated, not public.
pub async fn upload_video_handler(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    if !content_type.starts_with("video/") {
        return Err(ApiError::BadRequest(format!(
            "expected a video/* content type, got {}",
            content_type
        )));
    }
    if body.is_empty() {
        return Err(ApiError::BadRequest("empty upload body".to_string()));
    }

    let video = state
        .store
        .save_uploaded_video(&body, content_type)
        .await
        .map_err(|e| ApiError::InternalServerError(format!("failed to save video: {}", e)))?;

    Ok(Json(json!({ "success": true, "video": video })))
}
