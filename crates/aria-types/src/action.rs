//! Action payloads and results.
//!
//! The language model requests side effects as an object with exactly one
//! key naming the action type. [`Action`] models this as an externally
//! tagged enum, so serde enforces the one-tag invariant: zero, unknown, or
//! multiple tags all fail to decode.

use crate::video::VideoDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for the send-gift-card action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftCardRequest {
    /// Gift card brand, e.g. "amazon" or "starbucks".
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount as given by the model, e.g. "10".
    pub amount: String,
    /// Recipient address.
    pub recipient: String,
}

/// Parameters for the watch-video action.
///
/// `platform` stays a string here: the dispatcher owns platform validation
/// so a bad platform becomes an invalid-params failure on this one action
/// instead of failing the whole reply decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchVideoRequest {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A side effect requested by the model. Exactly one variant tag is present
/// on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "sendGiftCard")]
    SendGiftCard(GiftCardRequest),
    #[serde(rename = "watchVideo")]
    WatchVideo(WatchVideoRequest),
}

impl Action {
    /// Returns the wire tag for this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SendGiftCard(_) => "sendGiftCard",
            Self::WatchVideo(_) => "watchVideo",
        }
    }
}

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    /// A watch-video action validated successfully.
    Video {
        success: bool,
        #[serde(rename = "videoData")]
        video_data: VideoDescriptor,
    },
    /// A consequential action was registered for later confirmation.
    Pending {
        #[serde(rename = "pendingActionId")]
        pending_action_id: String,
        message: String,
        #[serde(rename = "requiresConfirmation")]
        requires_confirmation: bool,
    },
}

/// An action awaiting explicit confirmation before any real-world effect.
///
/// Created when a confirmation-required action is dispatched; consumed when
/// confirmed or expired. The confirmation flow itself lives outside this
/// system; only the creation contract is defined here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAction {
    pub id: String,
    pub action: Action,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_tagged_action() {
        let action: Action = serde_json::from_str(
            r#"{"watchVideo": {"platform": "youtube", "videoId": "abc"}}"#,
        )
        .unwrap();
        match action {
            Action::WatchVideo(req) => {
                assert_eq!(req.platform, "youtube");
                assert_eq!(req.video_id.as_deref(), Some("abc"));
            }
            other => panic!("expected watchVideo, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        let result: Result<Action, _> =
            serde_json::from_str(r#"{"launchRocket": {"target": "moon"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_multiply_tagged_payload() {
        let result: Result<Action, _> = serde_json::from_str(
            r#"{"watchVideo": {"platform": "youtube"}, "sendGiftCard": {"type": "amazon", "amount": "10", "recipient": "a@b.c"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn gift_card_round_trips_with_type_field() {
        let action = Action::SendGiftCard(GiftCardRequest {
            kind: "amazon".to_string(),
            amount: "10".to_string(),
            recipient: "a@b.c".to_string(),
        });
        let v = serde_json::to_value(&action).unwrap();
        assert_eq!(v["sendGiftCard"]["type"], "amazon");
        let back: Action = serde_json::from_value(v).unwrap();
        assert_eq!(back, action);
    }
}
