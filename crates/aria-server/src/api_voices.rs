//! Voice catalog pass-through.

use crate::{api::ApiError, AppState};
use axum::extract::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

/// Handler for `GET /voices`. Proxies the synthesis provider's voice list
/// verbatim so the client can offer a voice picker.
pub async fn list_voices_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let voices = state
        .tts
        .list_voices()
        .await
        .map_err(|e| ApiError::InternalServerError(format!("failed to list voices: {}", e)))?;
    Ok(Json(voices))
}
