//! On-disk asset store.
//!
//! Speech artifacts live under `<audio_dir>/<request_id>/message_<i>.*` —
//! the request id namespaces each conversation so two in-flight requests
//! never overwrite each other's files. Canned assets (the greeting and
//! missing-credentials sets) live at the top of `audio_dir` and are
//! addressed by name. Videos live flat in `video_dir`.

use crate::error::MediaError;
use aria_types::{PhonemeTranscript, VideoDescriptor};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::{Path, PathBuf};

/// File extensions recognized as video when listing the library.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".ogg", ".mov", ".avi"];

#[derive(Debug, Clone)]
pub struct AssetStore {
    audio_dir: PathBuf,
    video_dir: PathBuf,
}

impl AssetStore {
    pub fn new(audio_dir: impl Into<PathBuf>, video_dir: impl Into<PathBuf>) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            video_dir: video_dir.into(),
        }
    }

    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    /// Path of the synthesized MP3 for a message, keyed by request + index.
    pub fn speech_path(&self, request_id: &str, index: usize) -> PathBuf {
        self.audio_dir
            .join(request_id)
            .join(format!("message_{}.mp3", index))
    }

    /// Path of the WAV produced by container conversion for a message.
    pub fn wav_path(&self, request_id: &str, index: usize) -> PathBuf {
        self.audio_dir
            .join(request_id)
            .join(format!("message_{}.wav", index))
    }

    /// Path of the phoneme transcript for a message.
    pub fn transcript_path(&self, request_id: &str, index: usize) -> PathBuf {
        self.audio_dir
            .join(request_id)
            .join(format!("message_{}.json", index))
    }

    /// Path of a canned audio asset, e.g. `intro_0` -> `<audio_dir>/intro_0.wav`.
    pub fn canned_audio_path(&self, name: &str) -> PathBuf {
        self.audio_dir.join(format!("{}.wav", name))
    }

    /// Path of a canned transcript asset.
    pub fn canned_transcript_path(&self, name: &str) -> PathBuf {
        self.audio_dir.join(format!("{}.json", name))
    }

    /// Writes synthesized speech bytes for a message, overwriting any prior
    /// artifact at the same key, and returns the written path.
    pub async fn write_speech(
        &self,
        request_id: &str,
        index: usize,
        bytes: &[u8],
    ) -> Result<PathBuf, MediaError> {
        let path = self.speech_path(request_id, index);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MediaError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| MediaError::Io {
                path: path.clone(),
                source: e,
            })?;
        Ok(path)
    }

    /// Removes a request's entire artifact namespace.
    ///
    /// Called once the reply envelope is assembled: audio and transcripts
    /// are embedded in the turns by then, and without removal the audio
    /// directory grows one namespace per conversation forever. A missing
    /// namespace is fine; other failures are logged and swallowed since the
    /// reply itself is already complete.
    pub async fn remove_request_artifacts(&self, request_id: &str) {
        let dir = self.audio_dir.join(request_id);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %dir.display(),
                    "failed to remove request artifacts: {}", e
                );
            }
        }
    }

    /// Reads an audio artifact and returns it base64-encoded.
    pub async fn audio_base64(&self, path: &Path) -> Result<String, MediaError> {
        let bytes = read_asset(path).await?;
        Ok(BASE64.encode(bytes))
    }

    /// Reads and parses a phoneme transcript artifact.
    pub async fn transcript(&self, path: &Path) -> Result<PhonemeTranscript, MediaError> {
        let bytes = read_asset(path).await?;
        serde_json::from_slice(&bytes).map_err(|e| MediaError::MalformedTranscript {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Lists the self-hosted video library in directory order.
    ///
    /// The video directory is created lazily if absent. Thumbnails are
    /// referenced under `thumbnails/` by convention; their existence is not
    /// checked.
    pub async fn list_videos(&self) -> Result<Vec<VideoDescriptor>, MediaError> {
        tokio::fs::create_dir_all(&self.video_dir)
            .await
            .map_err(|e| MediaError::Io {
                path: self.video_dir.clone(),
                source: e,
            })?;

        let mut entries =
            tokio::fs::read_dir(&self.video_dir)
                .await
                .map_err(|e| MediaError::Io {
                    path: self.video_dir.clone(),
                    source: e,
                })?;

        let mut videos = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| MediaError::Io {
            path: self.video_dir.clone(),
            source: e,
        })? {
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !has_video_extension(&filename) {
                continue;
            }
            let stem = strip_extension(&filename);
            videos.push(VideoDescriptor {
                filename: Some(filename.clone()),
                title: stem.replace(['-', '_'], " "),
                url: Some(format!("/videos/{}", filename)),
                thumbnail: Some(format!("/videos/thumbnails/{}.jpg", stem)),
                ..Default::default()
            });
        }
        Ok(videos)
    }

    /// Saves an uploaded video, deriving the filename from a millisecond
    /// timestamp and the declared content subtype.
    ///
    /// The caller-declared content type is trusted for the extension; no
    /// content sniffing is performed.
    pub async fn save_uploaded_video(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<VideoDescriptor, MediaError> {
        tokio::fs::create_dir_all(&self.video_dir)
            .await
            .map_err(|e| MediaError::Io {
                path: self.video_dir.clone(),
                source: e,
            })?;

        let now = chrono::Utc::now();
        let subtype = content_type.split('/').nth(1).unwrap_or("bin");
        let filename = format!("video_{}.{}", now.timestamp_millis(), subtype);
        let path = self.video_dir.join(&filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| MediaError::Io {
                path: path.clone(),
                source: e,
            })?;

        tracing::info!(
            filename = %filename,
            content_type = %content_type,
            size_bytes = bytes.len(),
            "saved uploaded video"
        );

        Ok(VideoDescriptor {
            filename: Some(filename.clone()),
            title: format!("Uploaded video {}", now.format("%Y-%m-%d %H:%M:%S UTC")),
            url: Some(format!("/videos/{}", filename)),
            ..Default::default()
        })
    }
}

async fn read_asset(path: &Path) -> Result<Vec<u8>, MediaError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(MediaError::AssetNotFound(path.to_path_buf()))
        }
        Err(e) => Err(MediaError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn has_video_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn strip_extension(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) => filename[..idx].to_string(),
        None => filename.to_string(),
    }
}
