//! Shared wire and domain types for the Aria platform.
//!
//! This crate provides the foundational types used across all Aria crates:
//! reply turns and their expression/animation vocabularies, phoneme
//! transcripts for lip sync, the closed action union, and video descriptors.
//!
//! No crate in the workspace depends on anything *except* `aria-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

pub mod action;
pub mod lipsync;
pub mod reply;
pub mod video;

pub use action::{Action, ActionResult, GiftCardRequest, PendingAction, WatchVideoRequest};
pub use lipsync::{MouthCue, PhonemeTranscript, TranscriptMetadata};
pub use reply::{Animation, FacialExpression, ReplyEnvelope, Turn};
pub use video::{VideoDescriptor, VideoPlatform};
