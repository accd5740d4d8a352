use serde::{Deserialize, Serialize};
use std::fmt;

fn default_endpoint() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    // The voice the avatar ships with.
    "kgG7dCoKCfLehAPWkJOE".to_string()
}

/// ElevenLabs connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// API key. An empty string or "-" means synthesis is not configured.
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Voice to synthesize with.
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    /// API base URL. Overridable for tests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            voice_id: default_voice_id(),
            endpoint: default_endpoint(),
        }
    }
}

impl fmt::Debug for VoiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceConfig")
            .field("api_key", &"[REDACTED]")
            .field("voice_id", &self.voice_id)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl VoiceConfig {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            endpoint: default_endpoint(),
        }
    }

    /// Whether a usable API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = VoiceConfig::new("super-secret", "voice-1");
        let dbg = format!("{:?}", config);
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("[REDACTED]"));
    }

    #[test]
    fn placeholder_key_counts_as_unconfigured() {
        assert!(!VoiceConfig::new("-", "v").is_configured());
        assert!(!VoiceConfig::new("", "v").is_configured());
        assert!(VoiceConfig::new("real-key", "v").is_configured());
    }
}
