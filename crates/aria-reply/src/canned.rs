//! Canned turn sets.
//!
//! The greeting set (empty input) and the configuration-error set (missing
//! credentials) are built purely from pre-recorded assets — zero external
//! calls, so both branches stay available under any misconfiguration. A
//! missing canned asset degrades that turn to empty audio with a warning
//! instead of failing the request.

use aria_media::AssetStore;
use aria_types::{Animation, FacialExpression, Turn};

/// The two-turn greeting returned for empty or whitespace-only input.
pub async fn greeting_turns(store: &AssetStore) -> Vec<Turn> {
    vec![
        canned_turn(
            store,
            "intro_0",
            "Hey dear... How was your day?",
            FacialExpression::Smile,
            Animation::Talking1,
        )
        .await,
        canned_turn(
            store,
            "intro_1",
            "I missed you so much... Please don't go for so long!",
            FacialExpression::Sad,
            Animation::Crying,
        )
        .await,
    ]
}

/// The two-turn set returned when API credentials are absent.
pub async fn missing_credentials_turns(store: &AssetStore) -> Vec<Turn> {
    vec![
        canned_turn(
            store,
            "api_0",
            "Please my dear, don't forget to add your API keys!",
            FacialExpression::Angry,
            Animation::Angry,
        )
        .await,
        canned_turn(
            store,
            "api_1",
            "You don't want to run up a crazy OpenAI and ElevenLabs bill, right?",
            FacialExpression::Smile,
            Animation::Laughing,
        )
        .await,
    ]
}

async fn canned_turn(
    store: &AssetStore,
    name: &str,
    text: &str,
    facial_expression: FacialExpression,
    animation: Animation,
) -> Turn {
    let audio = match store.audio_base64(&store.canned_audio_path(name)).await {
        Ok(audio) => audio,
        Err(e) => {
            tracing::warn!(asset = name, "canned audio unavailable: {}", e);
            String::new()
        }
    };
    let lipsync = match store.transcript(&store.canned_transcript_path(name)).await {
        Ok(transcript) => transcript,
        Err(e) => {
            tracing::warn!(asset = name, "canned transcript unavailable: {}", e);
            Default::default()
        }
    };
    Turn {
        text: text.to_string(),
        facial_expression,
        animation,
        audio,
        lipsync,
        action: None,
        result: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greeting_is_exactly_two_turns_even_without_assets() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

        let turns = greeting_turns(&store).await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].facial_expression, FacialExpression::Smile);
        assert_eq!(turns[1].animation, Animation::Crying);
        assert!(turns.iter().all(|t| t.audio.is_empty()));
    }

    #[tokio::test]
    async fn canned_turn_picks_up_assets_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let audio_dir = tmp.path().join("audios");
        tokio::fs::create_dir_all(&audio_dir).await.unwrap();
        tokio::fs::write(audio_dir.join("intro_0.wav"), b"RIFFxxxx")
            .await
            .unwrap();
        tokio::fs::write(
            audio_dir.join("intro_0.json"),
            r#"{"mouthCues":[{"start":0.0,"end":0.2,"value":"X"}]}"#,
        )
        .await
        .unwrap();

        let store = AssetStore::new(&audio_dir, tmp.path().join("videos"));
        let turns = greeting_turns(&store).await;
        assert!(!turns[0].audio.is_empty());
        assert_eq!(turns[0].lipsync.mouth_cues.len(), 1);
        // intro_1 assets are absent and degrade silently.
        assert!(turns[1].audio.is_empty());
    }
}
