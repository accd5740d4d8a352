//! Chat API handler.

use crate::{api::ApiError, AppState};
use aria_types::ReplyEnvelope;
use axum::{
    body::Bytes,
    extract::{Extension, Json},
};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's utterance. Absent or blank input yields the canned
    /// greeting set.
    #[serde(default)]
    pub message: Option<String>,
}

/// Handler for `POST /chat`.
///
/// The body is read raw so an absent or empty body counts as a missing
/// message (greeting branch) instead of being rejected by the extractor.
pub async fn chat_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ReplyEnvelope>, ApiError> {
    let message = if body.is_empty() {
        String::new()
    } else {
        let payload: ChatRequest = serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("invalid request body: {}", e)))?;
        payload.message.unwrap_or_default()
    };

    let envelope = state.orchestrator.generate_reply(&message).await?;
    Ok(Json(envelope))
}
