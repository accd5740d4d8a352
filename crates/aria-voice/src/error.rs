use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("TTS error: {0}")]
    Tts(String),

    #[error("audio conversion failed (ffmpeg exit {status:?}): {stderr}")]
    Conversion { status: Option<i32>, stderr: String },

    #[error("phoneme extraction failed (rhubarb exit {status:?}): {stderr}")]
    Transcription { status: Option<i32>, stderr: String },

    #[error("{stage} timed out after {seconds} seconds")]
    Timeout { stage: &'static str, seconds: u64 },

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
