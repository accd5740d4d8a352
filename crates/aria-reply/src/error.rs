use aria_media::MediaError;
use aria_voice::VoiceError;
use thiserror::Error;

/// Pipeline-wide failures. Per-turn action failures never surface here;
/// they are attached to the owning turn as `{"error": ...}` instead.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("malformed model reply: {0}")]
    MalformedReply(String),

    #[error("language model request failed: {0}")]
    Upstream(String),

    #[error("language model request timed out after {0} seconds")]
    UpstreamTimeout(u64),

    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error(transparent)]
    Media(#[from] MediaError),
}
