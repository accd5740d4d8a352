//! Media asset storage for the Aria platform.
//!
//! Manages the on-disk artifacts the reply pipeline produces and consumes:
//! synthesized speech audio, converted WAV files, phoneme transcripts, and
//! the self-hosted video library. Speech artifacts are namespaced per
//! request so concurrent conversations never share paths.

pub mod error;
pub mod store;

pub use error::MediaError;
pub use store::{AssetStore, VIDEO_EXTENSIONS};
