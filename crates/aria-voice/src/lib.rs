//! Speech tooling for the Aria platform.
//!
//! Two external collaborators live behind this crate: the ElevenLabs HTTP
//! API for speech synthesis, and the local ffmpeg + rhubarb toolchain that
//! turns a synthesized MP3 into a timed phoneme transcript for lip sync.
//! Both are treated as opaque services with deadlines on every call.

pub mod config;
pub mod error;
pub mod lipsync;
pub mod tts;

pub use config::VoiceConfig;
pub use error::VoiceError;
pub use lipsync::LipSync;
pub use tts::TtsClient;
