use aria_voice::{LipSync, VoiceError};

#[tokio::test]
async fn missing_ffmpeg_binary_is_a_spawn_error() {
    let tmp = tempfile::tempdir().unwrap();
    let pipeline = LipSync::new("/nonexistent/ffmpeg", "/nonexistent/rhubarb");

    let result = pipeline
        .transcribe(
            &tmp.path().join("in.mp3"),
            &tmp.path().join("out.wav"),
            &tmp.path().join("out.json"),
        )
        .await;

    match result {
        Err(VoiceError::Spawn { tool, .. }) => assert_eq!(tool, "ffmpeg"),
        other => panic!("expected Spawn error for ffmpeg, got {:?}", other),
    }
}

#[tokio::test]
async fn conversion_failure_names_the_stage_and_status() {
    // Only run when ffmpeg is actually installed.
    if tokio::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .await
        .is_err()
    {
        eprintln!("Skipping conversion test: ffmpeg not installed.");
        return;
    }

    let tmp = tempfile::tempdir().unwrap();
    let missing_input = tmp.path().join("does-not-exist.mp3");
    let pipeline = LipSync::default();

    let result = pipeline
        .transcribe(
            &missing_input,
            &tmp.path().join("out.wav"),
            &tmp.path().join("out.json"),
        )
        .await;

    match result {
        Err(VoiceError::Conversion { status, stderr }) => {
            assert_ne!(status, Some(0));
            assert!(!stderr.is_empty());
        }
        other => panic!("expected Conversion error, got {:?}", other),
    }
}
