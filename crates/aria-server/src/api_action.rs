//! Direct action dispatch handler.
//!
//! `POST /action` lets the presentation layer dispatch an action outside a
//! chat reply (e.g. re-trying a video, or the confirmation UI probing a
//! gift card). The payload arrives as a `{actionType, actionData}` pair and
//! is reconstructed into the same tagged shape the dispatcher validates, so
//! both entry points share one validation boundary.

use crate::{api::ApiError, AppState};
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Request body for `POST /action`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action_type: String,
    #[serde(default)]
    pub action_data: Value,
}

/// Handler for `POST /action`.
pub async fn action_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<ActionRequest>,
) -> Response {
    if !state.orchestrator.credentials_present() {
        return ApiError::Unauthorized("API keys not configured".to_string()).into_response();
    }

    let raw = json!({ payload.action_type.clone(): payload.action_data });
    match state.dispatcher.dispatch_value(&raw) {
        Ok((action, result)) => {
            tracing::info!(action = action.tag(), "dispatched action");
            Json(json!({ "success": true, "result": result })).into_response()
        }
        Err(e) => {
            tracing::error!(action_type = %payload.action_type, "action dispatch failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
