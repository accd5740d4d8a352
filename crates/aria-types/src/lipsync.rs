//! Phoneme transcript types for lip sync.
//!
//! Wire-compatible with the JSON emitted by the rhubarb lip-sync extractor:
//! a `metadata` block and an ordered `mouthCues` array of timed visemes.

use serde::{Deserialize, Serialize};

/// A timed viseme: the mouth shape `value` is held from `start` to `end`
/// (seconds from the start of the audio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouthCue {
    pub start: f64,
    pub end: f64,
    pub value: String,
}

/// Extractor metadata carried alongside the cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMetadata {
    #[serde(rename = "soundFile", default, skip_serializing_if = "Option::is_none")]
    pub sound_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// An ordered sequence of timed visemes, read-only once produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhonemeTranscript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TranscriptMetadata>,
    #[serde(rename = "mouthCues", default)]
    pub mouth_cues: Vec<MouthCue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rhubarb_output() {
        let json = r#"{
            "metadata": { "soundFile": "message_0.wav", "duration": 1.52 },
            "mouthCues": [
                { "start": 0.00, "end": 0.17, "value": "X" },
                { "start": 0.17, "end": 0.38, "value": "B" }
            ]
        }"#;
        let transcript: PhonemeTranscript = serde_json::from_str(json).unwrap();
        assert_eq!(transcript.mouth_cues.len(), 2);
        assert_eq!(transcript.mouth_cues[1].value, "B");
        assert_eq!(transcript.metadata.unwrap().duration, Some(1.52));
    }

    #[test]
    fn empty_transcript_is_valid() {
        let transcript: PhonemeTranscript = serde_json::from_str("{}").unwrap();
        assert!(transcript.mouth_cues.is_empty());
        assert!(transcript.metadata.is_none());
    }
}
