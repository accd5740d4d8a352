//! Reply turn definitions.
//!
//! A [`Turn`] is one reply unit: spoken text, the synthesized audio for it,
//! a phoneme transcript driving mouth animation, the expression/animation
//! tags the avatar should play, and an optional action with its result.

use crate::action::Action;
use crate::lipsync::PhonemeTranscript;
use serde::{Deserialize, Serialize};

/// Facial expression tags the presentation layer knows how to render.
///
/// The language model emits these as strings and is not fully reliable;
/// unrecognized values decode to [`FacialExpression::Default`] rather than
/// failing the whole reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacialExpression {
    Smile,
    Sad,
    Angry,
    Surprised,
    FunnyFace,
    #[default]
    Default,
}

impl FacialExpression {
    /// Returns the wire label for this expression.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smile => "smile",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Surprised => "surprised",
            Self::FunnyFace => "funnyFace",
            Self::Default => "default",
        }
    }
}

impl From<String> for FacialExpression {
    fn from(s: String) -> Self {
        match s.as_str() {
            "smile" => Self::Smile,
            "sad" => Self::Sad,
            "angry" => Self::Angry,
            "surprised" => Self::Surprised,
            "funnyFace" => Self::FunnyFace,
            _ => Self::Default,
        }
    }
}

impl From<FacialExpression> for String {
    fn from(e: FacialExpression) -> Self {
        e.as_str().to_string()
    }
}

/// Body animation clips the presentation layer knows how to play.
///
/// Same leniency as [`FacialExpression`]: unknown labels decode to
/// [`Animation::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Animation {
    Talking0,
    Talking1,
    Talking2,
    Crying,
    Laughing,
    Rumba,
    #[default]
    Idle,
    Terrified,
    Angry,
}

impl Animation {
    /// Returns the wire label for this animation clip.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Talking0 => "Talking_0",
            Self::Talking1 => "Talking_1",
            Self::Talking2 => "Talking_2",
            Self::Crying => "Crying",
            Self::Laughing => "Laughing",
            Self::Rumba => "Rumba",
            Self::Idle => "Idle",
            Self::Terrified => "Terrified",
            Self::Angry => "Angry",
        }
    }
}

impl From<String> for Animation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Talking_0" => Self::Talking0,
            "Talking_1" => Self::Talking1,
            "Talking_2" => Self::Talking2,
            "Crying" => Self::Crying,
            "Laughing" => Self::Laughing,
            "Rumba" => Self::Rumba,
            "Idle" => Self::Idle,
            "Terrified" => Self::Terrified,
            "Angry" => Self::Angry,
            _ => Self::Idle,
        }
    }
}

impl From<Animation> for String {
    fn from(a: Animation) -> Self {
        a.as_str().to_string()
    }
}

/// One multimodal reply turn.
///
/// Created from the language model's structured output (text, expression,
/// animation, optional action); `audio`, `lipsync`, and `result` are filled
/// in by the reply pipeline before the turn is placed in the envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    /// The conversational response text.
    pub text: String,
    /// Facial expression tag for the avatar.
    #[serde(default)]
    pub facial_expression: FacialExpression,
    /// Body animation clip for the avatar.
    #[serde(default)]
    pub animation: Animation,
    /// Base64-encoded synthesized speech audio (MP3 or WAV).
    #[serde(default)]
    pub audio: String,
    /// Phoneme transcript aligned to `audio`.
    #[serde(default)]
    pub lipsync: PhonemeTranscript,
    /// Optional side effect requested by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Result of dispatching `action`, or `{"error": ...}` if dispatch failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

/// The single top-level response object consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    pub messages: Vec<Turn>,
}

impl ReplyEnvelope {
    /// Wraps an ordered turn list. No logic beyond shape consistency.
    pub fn new(messages: Vec<Turn>) -> Self {
        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_labels_round_trip() {
        for e in [
            FacialExpression::Smile,
            FacialExpression::Sad,
            FacialExpression::Angry,
            FacialExpression::Surprised,
            FacialExpression::FunnyFace,
            FacialExpression::Default,
        ] {
            assert_eq!(FacialExpression::from(e.as_str().to_string()), e);
        }
    }

    #[test]
    fn unknown_expression_falls_back_to_default() {
        let e: FacialExpression = serde_json::from_str("\"winking\"").unwrap();
        assert_eq!(e, FacialExpression::Default);
    }

    #[test]
    fn unknown_animation_falls_back_to_idle() {
        let a: Animation = serde_json::from_str("\"Moonwalk\"").unwrap();
        assert_eq!(a, Animation::Idle);
    }

    #[test]
    fn turn_uses_camel_case_wire_names() {
        let turn = Turn {
            text: "hi".to_string(),
            facial_expression: FacialExpression::Smile,
            animation: Animation::Talking1,
            ..Default::default()
        };
        let v = serde_json::to_value(&turn).unwrap();
        assert_eq!(v["facialExpression"], "smile");
        assert_eq!(v["animation"], "Talking_1");
        assert!(v.get("action").is_none());
        assert!(v.get("result").is_none());
    }

    #[test]
    fn turn_decodes_from_model_output_shape() {
        let turn: Turn = serde_json::from_str(
            r#"{"text": "hello", "facialExpression": "surprised", "animation": "Terrified"}"#,
        )
        .unwrap();
        assert_eq!(turn.facial_expression, FacialExpression::Surprised);
        assert_eq!(turn.animation, Animation::Terrified);
        assert!(turn.audio.is_empty());
        assert!(turn.lipsync.mouth_cues.is_empty());
    }
}
