use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("asset not found: {0}")]
    AssetNotFound(PathBuf),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed transcript {path}: {source}")]
    MalformedTranscript {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
