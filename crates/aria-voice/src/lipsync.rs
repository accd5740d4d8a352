//! Two-stage lip-sync pipeline.
//!
//! Stage 1 converts the synthesized MP3 to WAV with ffmpeg (rhubarb only
//! accepts WAV/OGG input). Stage 2 runs rhubarb in phonetic mode to produce
//! the timed viseme transcript. Both stages overwrite their output, so
//! re-running a key is idempotent. Failures name the stage and carry the
//! tool's exit status so the caller can attribute the fault.

use crate::error::VoiceError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Deadline for the container conversion stage.
const FFMPEG_TIMEOUT: Duration = Duration::from_secs(60);

/// Deadline for the phoneme extraction stage.
const RHUBARB_TIMEOUT: Duration = Duration::from_secs(120);

/// Runner for the ffmpeg + rhubarb toolchain.
#[derive(Debug, Clone)]
pub struct LipSync {
    ffmpeg: PathBuf,
    rhubarb: PathBuf,
}

impl Default for LipSync {
    fn default() -> Self {
        Self::new("ffmpeg", "rhubarb")
    }
}

impl LipSync {
    pub fn new(ffmpeg: impl Into<PathBuf>, rhubarb: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            rhubarb: rhubarb.into(),
        }
    }

    /// Runs both stages: `mp3` -> `wav` -> `transcript` (rhubarb JSON).
    pub async fn transcribe(
        &self,
        mp3: &Path,
        wav: &Path,
        transcript: &Path,
    ) -> Result<(), VoiceError> {
        self.convert(mp3, wav).await?;
        self.extract(wav, transcript).await
    }

    /// Stage 1: container conversion. `-y` overwrites any prior output.
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), VoiceError> {
        tracing::debug!(input = %input.display(), output = %output.display(), "converting audio");
        let mut command = Command::new(&self.ffmpeg);
        command
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg(output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = command.spawn().map_err(|e| VoiceError::Spawn {
            tool: "ffmpeg",
            source: e,
        })?;

        let output = tokio::time::timeout(FFMPEG_TIMEOUT, child.wait_with_output())
            .await
            .map_err(|_| VoiceError::Timeout {
                stage: "audio conversion",
                seconds: FFMPEG_TIMEOUT.as_secs(),
            })?
            .map_err(|e| VoiceError::Spawn {
                tool: "ffmpeg",
                source: e,
            })?;

        if !output.status.success() {
            return Err(VoiceError::Conversion {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    /// Stage 2: phoneme extraction. `-r phonetic` trades accuracy for speed,
    /// which is the right call for conversational turnaround.
    async fn extract(&self, wav: &Path, transcript: &Path) -> Result<(), VoiceError> {
        tracing::debug!(wav = %wav.display(), transcript = %transcript.display(), "extracting phonemes");
        let mut command = Command::new(&self.rhubarb);
        command
            .arg("-f")
            .arg("json")
            .arg("-o")
            .arg(transcript)
            .arg(wav)
            .arg("-r")
            .arg("phonetic")
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = command.spawn().map_err(|e| VoiceError::Spawn {
            tool: "rhubarb",
            source: e,
        })?;

        let output = tokio::time::timeout(RHUBARB_TIMEOUT, child.wait_with_output())
            .await
            .map_err(|_| VoiceError::Timeout {
                stage: "phoneme extraction",
                seconds: RHUBARB_TIMEOUT.as_secs(),
            })?
            .map_err(|e| VoiceError::Spawn {
                tool: "rhubarb",
                source: e,
            })?;

        if !output.status.success() {
            return Err(VoiceError::Transcription {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}
