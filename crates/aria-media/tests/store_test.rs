use aria_media::{AssetStore, MediaError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

#[tokio::test]
async fn audio_round_trips_through_base64() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    let payload = b"\xFF\xFBnot-really-mp3-but-bytes\x00\x01";
    let path = store.write_speech("req-1", 0, payload).await.unwrap();

    let encoded = store.audio_base64(&path).await.unwrap();
    let decoded = BASE64.decode(encoded).unwrap();
    assert_eq!(decoded, payload);
}

#[tokio::test]
async fn write_speech_overwrites_prior_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    store.write_speech("req-1", 0, b"first").await.unwrap();
    let path = store.write_speech("req-1", 0, b"second").await.unwrap();

    let bytes = tokio::fs::read(&path).await.unwrap();
    assert_eq!(bytes, b"second");
}

#[tokio::test]
async fn missing_audio_is_asset_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    let path = store.speech_path("req-1", 7);
    match store.audio_base64(&path).await {
        Err(MediaError::AssetNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected AssetNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_transcript_is_asset_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    let path = store.transcript_path("req-1", 0);
    assert!(matches!(
        store.transcript(&path).await,
        Err(MediaError::AssetNotFound(_))
    ));
}

#[tokio::test]
async fn transcript_parses_rhubarb_json() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    let path = store.transcript_path("req-1", 0);
    tokio::fs::create_dir_all(path.parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(
        &path,
        r#"{"metadata":{"duration":0.5},"mouthCues":[{"start":0.0,"end":0.5,"value":"A"}]}"#,
    )
    .await
    .unwrap();

    let transcript = store.transcript(&path).await.unwrap();
    assert_eq!(transcript.mouth_cues.len(), 1);
    assert_eq!(transcript.mouth_cues[0].value, "A");
}

#[tokio::test]
async fn remove_request_artifacts_clears_only_that_namespace() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    let kept = store.write_speech("req-keep", 0, b"keep").await.unwrap();
    store.write_speech("req-gone", 0, b"gone").await.unwrap();
    store.write_speech("req-gone", 1, b"gone").await.unwrap();
    let gone_dir = store.speech_path("req-gone", 0).parent().unwrap().to_path_buf();

    store.remove_request_artifacts("req-gone").await;

    assert!(!gone_dir.exists());
    assert!(kept.exists());

    // Removing an already-absent namespace is fine.
    store.remove_request_artifacts("req-gone").await;
}

#[tokio::test]
async fn list_videos_creates_directory_lazily() {
    let tmp = tempfile::tempdir().unwrap();
    let video_dir = tmp.path().join("videos");
    let store = AssetStore::new(tmp.path().join("audios"), &video_dir);

    assert!(!video_dir.exists());
    let videos = store.list_videos().await.unwrap();
    assert!(videos.is_empty());
    assert!(video_dir.exists());

    // Idempotent on a pre-existing directory.
    let videos = store.list_videos().await.unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn list_videos_filters_and_titles() {
    let tmp = tempfile::tempdir().unwrap();
    let video_dir = tmp.path().join("videos");
    tokio::fs::create_dir_all(&video_dir).await.unwrap();
    tokio::fs::write(video_dir.join("beach-day_fun.mp4"), b"x")
        .await
        .unwrap();
    tokio::fs::write(video_dir.join("readme.txt"), b"x").await.unwrap();

    let store = AssetStore::new(tmp.path().join("audios"), &video_dir);
    let videos = store.list_videos().await.unwrap();

    assert_eq!(videos.len(), 1);
    let v = &videos[0];
    assert_eq!(v.filename.as_deref(), Some("beach-day_fun.mp4"));
    assert_eq!(v.title, "beach day fun");
    assert_eq!(v.url.as_deref(), Some("/videos/beach-day_fun.mp4"));
    assert_eq!(
        v.thumbnail.as_deref(),
        Some("/videos/thumbnails/beach-day_fun.jpg")
    );
}

#[tokio::test]
async fn upload_save_uses_declared_subtype() {
    let tmp = tempfile::tempdir().unwrap();
    let store = AssetStore::new(tmp.path().join("audios"), tmp.path().join("videos"));

    let video = store
        .save_uploaded_video(b"fake-bytes", "video/webm")
        .await
        .unwrap();

    let filename = video.filename.unwrap();
    assert!(filename.starts_with("video_"));
    assert!(filename.ends_with(".webm"));
    assert_eq!(video.url.unwrap(), format!("/videos/{}", filename));

    let saved = tokio::fs::read(store.video_dir().join(&filename))
        .await
        .unwrap();
    assert_eq!(saved, b"fake-bytes");
}
