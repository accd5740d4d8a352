//! Action validation and dispatch.
//!
//! Actions fall into two classes by design: `watchVideo` is validation-only
//! and executes synchronously; `sendGiftCard` is cost-incurring and is never
//! executed here — it is registered as a pending action and waits for an
//! explicit confirmation step that lives outside this system. That asymmetry
//! is the safety boundary for consequential actions.

use aria_types::{Action, ActionResult, PendingAction, VideoDescriptor, WatchVideoRequest};
use chrono::{Duration as ChronoDuration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

/// How long a pending action stays claimable before pruning.
const PENDING_ACTION_TTL_MINUTES: i64 = 30;

/// Wire tags the dispatcher understands.
const KNOWN_TAGS: &[&str] = &["sendGiftCard", "watchVideo"];

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("invalid action parameters: {0}")]
    InvalidParams(String),

    #[error("unknown action type: {0}")]
    UnknownType(String),
}

/// Registry of actions awaiting confirmation.
///
/// All lock acquisitions are brief HashMap operations that never span
/// `.await` points, so a synchronous mutex is safe here.
#[derive(Debug, Clone, Default)]
pub struct PendingActions {
    inner: Arc<Mutex<HashMap<String, PendingAction>>>,
}

impl PendingActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action for later confirmation and returns the record.
    /// Expired entries are pruned on the way in.
    pub fn register(&self, action: Action) -> PendingAction {
        let pending = PendingAction {
            id: Uuid::new_v4().to_string(),
            action,
            created_at: Utc::now(),
        };
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let cutoff = Utc::now() - ChronoDuration::minutes(PENDING_ACTION_TTL_MINUTES);
        map.retain(|_, p| p.created_at > cutoff);
        map.insert(pending.id.clone(), pending.clone());
        pending
    }

    /// Consumes a pending action by id. The confirmation flow calls this.
    pub fn take(&self, id: &str) -> Option<PendingAction> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies, validates, and dispatches actions.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    pending: PendingActions,
}

impl ActionDispatcher {
    pub fn new(pending: PendingActions) -> Self {
        Self { pending }
    }

    pub fn pending(&self) -> &PendingActions {
        &self.pending
    }

    /// Parses a raw action payload and dispatches it. This is the single
    /// validation boundary for both the in-reply path and `POST /action`.
    pub fn dispatch_value(&self, raw: &Value) -> Result<(Action, ActionResult), ActionError> {
        let action = parse_action(raw)?;
        let result = self.dispatch(&action)?;
        Ok((action, result))
    }

    /// Dispatches an already-decoded action.
    pub fn dispatch(&self, action: &Action) -> Result<ActionResult, ActionError> {
        match action {
            Action::WatchVideo(req) => watch_video(req),
            Action::SendGiftCard(_) => Ok(self.defer(action.clone())),
        }
    }

    /// Registers a confirmation-required action. The transfer itself never
    /// happens in this call.
    fn defer(&self, action: Action) -> ActionResult {
        let pending = self.pending.register(action);
        tracing::info!(pending_action_id = %pending.id, "registered pending action");
        ActionResult::Pending {
            pending_action_id: pending.id,
            message: "I've prepared this gift card for you. Please confirm to proceed."
                .to_string(),
            requires_confirmation: true,
        }
    }
}

/// Decodes a raw payload into the closed [`Action`] union, rejecting
/// unknown and multiply-tagged payloads explicitly.
pub fn parse_action(raw: &Value) -> Result<Action, ActionError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ActionError::InvalidParams("action must be an object".to_string()))?;

    let mut keys = obj.keys();
    let tag = match (keys.next(), keys.next()) {
        (Some(tag), None) => tag,
        _ => {
            return Err(ActionError::InvalidParams(format!(
                "action must carry exactly one type tag, got {}",
                obj.len()
            )))
        }
    };
    if !KNOWN_TAGS.contains(&tag.as_str()) {
        return Err(ActionError::UnknownType(tag.clone()));
    }

    serde_json::from_value(raw.clone()).map_err(|e| ActionError::InvalidParams(e.to_string()))
}

/// Validates a watch-video request. No side effects beyond validation.
fn watch_video(req: &WatchVideoRequest) -> Result<ActionResult, ActionError> {
    match req.platform.as_str() {
        "youtube" => {
            let video_id = req
                .video_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    ActionError::InvalidParams(
                        "no video ID provided for YouTube video".to_string(),
                    )
                })?;
            Ok(ActionResult::Video {
                success: true,
                video_data: VideoDescriptor::youtube(video_id, req.title.as_deref()),
            })
        }
        "selfhosted" => {
            let raw_url = req.url.as_deref().filter(|u| !u.is_empty()).ok_or_else(|| {
                ActionError::InvalidParams("no URL provided for self-hosted video".to_string())
            })?;
            let parsed = url::Url::parse(raw_url).map_err(|_| {
                ActionError::InvalidParams(
                    "invalid URL format for self-hosted video".to_string(),
                )
            })?;
            // Non-video extensions are allowed; the mismatch is only worth a
            // warning since the library may serve streams without one.
            if !has_video_extension(parsed.path()) {
                tracing::warn!(url = %raw_url, "URL may not point to a video file");
            }
            Ok(ActionResult::Video {
                success: true,
                video_data: VideoDescriptor::selfhosted(raw_url, req.title.as_deref()),
            })
        }
        other => Err(ActionError::InvalidParams(format!(
            "unsupported video platform: {} (supported: youtube, selfhosted)",
            other
        ))),
    }
}

fn has_video_extension(path: &str) -> bool {
    let lower = path.to_lowercase();
    aria_media::VIDEO_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}
