//! Aria server library logic.

pub mod api;
pub mod api_action;
pub mod api_chat;
pub mod api_videos;
pub mod api_voices;
pub mod config;

use aria_media::AssetStore;
use aria_reply::{ActionDispatcher, ChatClient, PendingActions, ReplyOrchestrator};
use aria_voice::{LipSync, TtsClient};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Maximum request body size (2 MiB). Protects against OOM from oversized
/// payloads.
const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Maximum upload body size (50 MiB) for the video upload route.
const MAX_UPLOAD_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The reply pipeline.
    pub orchestrator: ReplyOrchestrator,
    /// Action validation/dispatch for `POST /action`.
    pub dispatcher: ActionDispatcher,
    /// On-disk media assets.
    pub store: AssetStore,
    /// Speech synthesis client (voice listing).
    pub tts: TtsClient,
}

impl AppState {
    /// Builds the full service graph from configuration. Media directories
    /// are created eagerly so static serving works from the first request.
    pub fn from_config(config: &config::Config) -> std::io::Result<Self> {
        std::fs::create_dir_all(&config.media.audio_dir)?;
        std::fs::create_dir_all(&config.media.video_dir)?;

        let store = AssetStore::new(&config.media.audio_dir, &config.media.video_dir);
        let tts = TtsClient::new(config.voice.clone());
        let dispatcher = ActionDispatcher::new(PendingActions::new());
        let orchestrator = ReplyOrchestrator::new(
            ChatClient::new(config.llm.clone()),
            tts.clone(),
            LipSync::default(),
            store.clone(),
            dispatcher.clone(),
        );

        Ok(Self {
            orchestrator,
            dispatcher,
            store,
            tts,
        })
    }
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    // Upload route needs a larger body limit for raw video bodies.
    let upload_routes = Router::new()
        .route("/upload-video", post(api_videos::upload_video_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES));

    let video_dir = state.store.video_dir().to_path_buf();

    Router::new()
        .route("/", get(health))
        .route("/chat", post(api_chat::chat_handler))
        .route("/action", post(api_action::action_handler))
        .route("/self-hosted-videos", get(api_videos::list_videos_handler))
        .route("/voices", get(api_voices::list_voices_handler))
        .merge(upload_routes)
        .nest_service("/videos", ServeDir::new(video_dir))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
