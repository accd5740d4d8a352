//! ElevenLabs text-to-speech client.

use crate::config::VoiceConfig;
use crate::error::VoiceError;
use serde::Serialize;
use std::time::Duration;

/// Maximum text input size for TTS (64 KiB). Prevents resource exhaustion
/// from oversized synthesis requests.
const MAX_TTS_INPUT_BYTES: usize = 64 * 1024;

/// Deadline for a single synthesis call.
const TTS_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// Client for the ElevenLabs speech synthesis API.
#[derive(Debug, Clone)]
pub struct TtsClient {
    config: VoiceConfig,
    http: reqwest::Client,
}

impl TtsClient {
    pub fn new(config: VoiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Whether a usable API key is present.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Synthesizes `text` to MP3 bytes with the configured voice.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, VoiceError> {
        if text.len() > MAX_TTS_INPUT_BYTES {
            return Err(VoiceError::Tts(format!(
                "text exceeds maximum size: {} bytes (limit: {} bytes)",
                text.len(),
                MAX_TTS_INPUT_BYTES
            )));
        }

        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.endpoint, self.config.voice_id
        );

        let response = self
            .http
            .post(&url)
            .timeout(TTS_TIMEOUT)
            .header("xi-api-key", &self.config.api_key)
            .header("accept", "audio/mpeg")
            .json(&SynthesisRequest {
                text,
                model_id: "eleven_monolingual_v1",
                voice_settings: VoiceSettings {
                    stability: 0.5,
                    similarity_boost: 0.5,
                },
            })
            .send()
            .await
            .map_err(map_transport("speech synthesis"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Tts(format!(
                "synthesis request failed with status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(map_transport("speech synthesis"))?;
        Ok(bytes.to_vec())
    }

    /// Lists the voices available to the configured account. Passed through
    /// verbatim for `GET /voices`.
    pub async fn list_voices(&self) -> Result<serde_json::Value, VoiceError> {
        let url = format!("{}/v1/voices", self.config.endpoint);

        let response = self
            .http
            .get(&url)
            .timeout(TTS_TIMEOUT)
            .header("xi-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(map_transport("voice listing"))?;

        if !response.status().is_success() {
            return Err(VoiceError::Tts(format!(
                "voice listing failed with status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(map_transport("voice listing"))
    }
}

fn map_transport(stage: &'static str) -> impl Fn(reqwest::Error) -> VoiceError {
    move |e| {
        if e.is_timeout() {
            VoiceError::Timeout {
                stage,
                seconds: TTS_TIMEOUT.as_secs(),
            }
        } else {
            VoiceError::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn oversized_text_is_rejected_without_network() {
        let client = TtsClient::new(VoiceConfig::new("key", "voice"));
        let text = "a".repeat(MAX_TTS_INPUT_BYTES + 1);
        match client.synthesize(&text).await {
            Err(VoiceError::Tts(msg)) => assert!(msg.contains("maximum size")),
            other => panic!("expected Tts error, got {:?}", other),
        }
    }
}
