#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use semporna::application::ports::{SpeechEngine, SynthesisError};
use semporna::infrastructure::synthesis::EspeakEngine;

/// Stand-in engine binary: a shell script dropped into a temp directory.
fn fake_engine(dir: &tempfile::TempDir, body: &str) -> String {
    let path = dir.path().join("fake-engine");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();

    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn given_output_larger_than_a_pipe_buffer_then_all_bytes_come_back() {
    let dir = tempfile::TempDir::new().unwrap();
    // Consumes stdin, then writes far more than a pipe buffer holds. Without
    // concurrent draining the child would block on the full pipe and only
    // exit through the timeout kill.
    let binary = fake_engine(
        &dir,
        "cat > /dev/null\ndd if=/dev/zero bs=1024 count=200 2>/dev/null",
    );

    let engine = EspeakEngine::new(binary, 1);
    let audio = engine.synthesize("hello there", "male", "en").await.unwrap();

    assert_eq!(audio.len(), 200 * 1024);
}

#[tokio::test]
async fn given_failing_engine_then_its_stderr_is_surfaced() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_engine(
        &dir,
        "cat > /dev/null\necho 'no such voice' >&2\nexit 1",
    );

    let engine = EspeakEngine::new(binary, 1);
    let result = engine.synthesize("hello", "male", "en").await;

    assert!(matches!(
        result,
        Err(SynthesisError::Unavailable(ref msg)) if msg.contains("no such voice")
    ));
}

#[tokio::test]
async fn given_missing_binary_then_unavailable() {
    let engine = EspeakEngine::new("/nonexistent/speech-binary", 1);

    let result = engine.synthesize("hello", "male", "en").await;

    assert!(matches!(result, Err(SynthesisError::Unavailable(_))));
}

#[tokio::test]
async fn given_empty_text_then_no_process_is_spawned() {
    // A missing binary proves the short-circuit: spawning would fail.
    let engine = EspeakEngine::new("/nonexistent/speech-binary", 1);

    let audio = engine.synthesize("   ", "male", "en").await.unwrap();

    assert!(!audio.is_empty());
    assert_eq!(&audio[..2], &[0xFF, 0xFB]);
}
