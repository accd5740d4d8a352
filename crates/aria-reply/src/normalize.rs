//! Reply-shape normalization.
//!
//! The model is asked for a bare JSON array of messages but, even in JSON
//! mode, sometimes wraps the array in an object under a `messages` key.
//! Both shapes are accepted and normalized to one list; anything else is a
//! malformed reply. This tolerance is a documented property of the model,
//! not a bug to fix away.
//!
//! Messages are decoded leniently: expression/animation tags fall back to
//! defaults, and the optional action is kept as raw JSON so that action
//! validation happens at the dispatch boundary — a bad action must fail
//! that one turn, never the whole reply.

use crate::error::ReplyError;
use aria_types::{Animation, FacialExpression};
use serde::Deserialize;
use serde_json::Value;

/// Upper bound on messages per reply; the model is prompted for at most 3
/// and anything beyond that is dropped.
pub const MAX_REPLY_MESSAGES: usize = 3;

/// One structured message as the model produced it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub facial_expression: FacialExpression,
    #[serde(default)]
    pub animation: Animation,
    /// Raw action payload, validated later by the dispatcher.
    #[serde(default)]
    pub action: Option<Value>,
}

/// Parses the assistant content into an ordered message list, accepting
/// either a bare array or `{"messages": [...]}`.
pub fn normalize_reply(content: &str) -> Result<Vec<ModelMessage>, ReplyError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| ReplyError::MalformedReply(format!("reply is not JSON: {}", e)))?;

    let list = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("messages") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ReplyError::MalformedReply(
                    "`messages` key is not an array".to_string(),
                ))
            }
            None => {
                return Err(ReplyError::MalformedReply(
                    "object reply has no `messages` key".to_string(),
                ))
            }
        },
        other => {
            return Err(ReplyError::MalformedReply(format!(
                "expected array or object, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut messages = Vec::with_capacity(list.len().min(MAX_REPLY_MESSAGES));
    for item in list.into_iter().take(MAX_REPLY_MESSAGES) {
        let message: ModelMessage = serde_json::from_value(item)
            .map_err(|e| ReplyError::MalformedReply(format!("bad message shape: {}", e)))?;
        messages.push(message);
    }
    Ok(messages)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
