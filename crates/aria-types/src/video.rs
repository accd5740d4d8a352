//! Video descriptor types.

use serde::{Deserialize, Serialize};

/// Supported video platforms for the watch-video action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Selfhosted,
}

impl VideoPlatform {
    /// Returns the wire label for this platform.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Selfhosted => "selfhosted",
        }
    }
}

/// Describes a playable video: either a YouTube reference (videoId plus
/// derived embed/watch URLs), a self-hosted URL, or a library listing entry
/// (filename/url/thumbnail). Fields not applicable to a given kind are
/// omitted from the wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<VideoPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl VideoDescriptor {
    /// Builds a YouTube descriptor with derived embed and watch URLs.
    pub fn youtube(video_id: &str, title: Option<&str>) -> Self {
        Self {
            platform: Some(VideoPlatform::Youtube),
            title: title.unwrap_or("Shared YouTube Video").to_string(),
            video_id: Some(video_id.to_string()),
            embed_url: Some(format!("https://www.youtube.com/embed/{}", video_id)),
            watch_url: Some(format!("https://www.youtube.com/watch?v={}", video_id)),
            ..Default::default()
        }
    }

    /// Builds a self-hosted descriptor carrying the URL as-is. No videoId.
    pub fn selfhosted(url: &str, title: Option<&str>) -> Self {
        Self {
            platform: Some(VideoPlatform::Selfhosted),
            title: title.unwrap_or("Shared Video").to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }
}
