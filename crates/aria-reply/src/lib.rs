//! Reply generation for the Aria platform — the core pipeline.
//!
//! One inbound utterance becomes an ordered list of multimodal turns:
//! the language model produces up to three structured messages, each is
//! synthesized to speech and lip-synced, and any embedded action is
//! validated and dispatched. Empty input and missing credentials short
//! circuit into canned turn sets before any external call is made.

pub mod actions;
pub mod canned;
pub mod error;
pub mod llm;
pub mod normalize;
pub mod orchestrator;

pub use actions::{ActionDispatcher, ActionError, PendingActions};
pub use error::ReplyError;
pub use llm::{ChatClient, LlmConfig};
pub use normalize::{normalize_reply, ModelMessage, MAX_REPLY_MESSAGES};
pub use orchestrator::{attach_action, ReplyOrchestrator};
