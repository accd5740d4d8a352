//! The reply orchestrator — one utterance in, an ordered turn list out.

use crate::actions::ActionDispatcher;
use crate::canned;
use crate::error::ReplyError;
use crate::llm::ChatClient;
use crate::normalize::{normalize_reply, ModelMessage};
use aria_media::AssetStore;
use aria_types::{ReplyEnvelope, Turn};
use aria_voice::{LipSync, TtsClient};
use serde_json::{json, Value};
use uuid::Uuid;

/// Drives the per-turn pipeline: chat completion, speech synthesis, lip
/// sync, asset loading, and action dispatch, strictly in message order so
/// turns reach the presentation layer in spoken order.
#[derive(Debug, Clone)]
pub struct ReplyOrchestrator {
    chat: ChatClient,
    tts: TtsClient,
    lipsync: LipSync,
    store: AssetStore,
    dispatcher: ActionDispatcher,
}

impl ReplyOrchestrator {
    pub fn new(
        chat: ChatClient,
        tts: TtsClient,
        lipsync: LipSync,
        store: AssetStore,
        dispatcher: ActionDispatcher,
    ) -> Self {
        Self {
            chat,
            tts,
            lipsync,
            store,
            dispatcher,
        }
    }

    /// Whether both external services have usable credentials.
    pub fn credentials_present(&self) -> bool {
        self.chat.is_configured() && self.tts.is_configured()
    }

    /// Generates the full reply for one utterance.
    ///
    /// Empty/whitespace input and missing credentials return canned turn
    /// sets without touching any external service; these branches are
    /// checked first so they stay cheap and always available. Everything
    /// else runs the full pipeline. Per-turn action failures are attached
    /// to their turn; only pipeline-wide faults surface as `Err`.
    pub async fn generate_reply(&self, user_message: &str) -> Result<ReplyEnvelope, ReplyError> {
        let user_message = user_message.trim();
        if user_message.is_empty() {
            return Ok(ReplyEnvelope::new(
                canned::greeting_turns(&self.store).await,
            ));
        }
        if !self.credentials_present() {
            tracing::warn!("reply requested without API credentials, returning canned set");
            return Ok(ReplyEnvelope::new(
                canned::missing_credentials_turns(&self.store).await,
            ));
        }

        // Request-scoped namespace for audio artifacts: concurrent
        // conversations must never share file paths.
        let request_id = Uuid::new_v4().to_string();

        let content = self.chat.complete(user_message).await?;
        let messages = normalize_reply(&content)?;

        let rendered = self.render_turns(&request_id, messages).await;
        // Audio and transcripts are embedded in the turns by now; the
        // on-disk namespace is removed whether rendering succeeded or not,
        // or the audio directory grows one namespace per conversation.
        self.store.remove_request_artifacts(&request_id).await;
        let turns = rendered?;

        tracing::info!(
            request_id = %request_id,
            turns = turns.len(),
            "assembled reply"
        );
        Ok(ReplyEnvelope::new(turns))
    }

    async fn render_turns(
        &self,
        request_id: &str,
        messages: Vec<ModelMessage>,
    ) -> Result<Vec<Turn>, ReplyError> {
        let mut turns = Vec::with_capacity(messages.len());
        for (index, message) in messages.into_iter().enumerate() {
            turns.push(self.render_turn(request_id, index, message).await?);
        }
        Ok(turns)
    }

    /// Synthesizes, lip-syncs, and action-dispatches a single message.
    async fn render_turn(
        &self,
        request_id: &str,
        index: usize,
        message: ModelMessage,
    ) -> Result<Turn, ReplyError> {
        let speech = self.tts.synthesize(&message.text).await?;
        let mp3 = self.store.write_speech(request_id, index, &speech).await?;

        let wav = self.store.wav_path(request_id, index);
        let transcript_path = self.store.transcript_path(request_id, index);
        self.lipsync.transcribe(&mp3, &wav, &transcript_path).await?;

        let mut turn = Turn {
            text: message.text,
            facial_expression: message.facial_expression,
            animation: message.animation,
            audio: self.store.audio_base64(&mp3).await?,
            lipsync: self.store.transcript(&transcript_path).await?,
            action: None,
            result: None,
        };

        if let Some(raw) = message.action {
            attach_action(&self.dispatcher, &mut turn, &raw);
        }
        Ok(turn)
    }
}

/// Dispatches a raw action payload and attaches the outcome to the turn.
///
/// Dispatch failure is non-fatal by contract: the turn gets
/// `{"error": ...}` as its result and the rest of the reply proceeds.
pub fn attach_action(dispatcher: &ActionDispatcher, turn: &mut Turn, raw: &Value) {
    match dispatcher.dispatch_value(raw) {
        Ok((action, result)) => {
            turn.action = Some(action);
            turn.result = Some(serde_json::to_value(result).unwrap_or(Value::Null));
        }
        Err(e) => {
            tracing::warn!(error = %e, "action dispatch failed, attaching error to turn");
            turn.action = serde_json::from_value(raw.clone()).ok();
            turn.result = Some(json!({ "error": e.to_string() }));
        }
    }
}
