use bytes::Bytes;

use triscribe::application::ports::{TranscriptionEngine, TranscriptionError};
use triscribe::domain::{AudioClip, Language};
use triscribe::infrastructure::audio::LocalWhisperEngine;

use crate::helpers::start_transcription_backend;

fn clip() -> AudioClip {
    AudioClip::new("1234-clip.wav", Bytes::from_static(b"RIFF0000WAVE"))
}

#[tokio::test]
async fn given_successful_backend_when_transcribing_then_returns_candidate_with_raw_body() {
    let (server, backend) = start_transcription_backend(|lang| {
        (200, format!(r#"{{"text":"hello {lang}","duration":1.5}}"#))
    })
    .await;
    let engine = LocalWhisperEngine::new(&server.base_url);

    let candidate = engine
        .transcribe(&clip(), Language::English, "small")
        .await
        .unwrap();

    assert_eq!(candidate.lang, Language::English);
    assert_eq!(candidate.text, "hello en");
    assert_eq!(candidate.raw["duration"], 1.5);

    let received = backend.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].language, "en");
    assert_eq!(received[0].model, "small");
    assert_eq!(received[0].response_format, "json");
    assert_eq!(received[0].file_name.as_deref(), Some("1234-clip.wav"));
    assert_eq!(received[0].file_bytes, b"RIFF0000WAVE");
}

#[test]
fn given_base_url_with_trailing_slash_when_creating_then_endpoint_has_single_slash() {
    let engine = LocalWhisperEngine::new("http://localhost:8000/");
    assert_eq!(
        engine.endpoint(),
        "http://localhost:8000/v1/audio/transcriptions"
    );
}

#[tokio::test]
async fn given_backend_error_status_when_transcribing_then_returns_upstream_status() {
    let (server, _backend) =
        start_transcription_backend(|_| (500, r#"{"detail":"model not loaded"}"#.to_string()))
            .await;
    let engine = LocalWhisperEngine::new(&server.base_url);

    let error = engine
        .transcribe(&clip(), Language::Chinese, "medium")
        .await
        .unwrap_err();

    match error {
        TranscriptionError::UpstreamStatus {
            language,
            status,
            body,
        } => {
            assert_eq!(language, Language::Chinese);
            assert_eq!(status, 500);
            assert!(body.contains("model not loaded"));
        }
        other => panic!("expected upstream status, got {other:?}"),
    }
}

#[tokio::test]
async fn given_body_without_text_when_transcribing_then_text_is_empty() {
    let (server, _backend) =
        start_transcription_backend(|_| (200, r#"{"segments":[]}"#.to_string())).await;
    let engine = LocalWhisperEngine::new(&server.base_url);

    let candidate = engine
        .transcribe(&clip(), Language::Japanese, "medium")
        .await
        .unwrap();

    assert_eq!(candidate.text, "");
    assert!(candidate.raw.get("segments").is_some());
}

#[tokio::test]
async fn given_non_string_text_when_transcribing_then_text_is_empty() {
    let (server, _backend) =
        start_transcription_backend(|_| (200, r#"{"text":42}"#.to_string())).await;
    let engine = LocalWhisperEngine::new(&server.base_url);

    let candidate = engine
        .transcribe(&clip(), Language::Japanese, "medium")
        .await
        .unwrap();

    assert_eq!(candidate.text, "");
}

#[tokio::test]
async fn given_non_json_body_when_transcribing_then_returns_invalid_response() {
    let (server, _backend) =
        start_transcription_backend(|_| (200, "plain text".to_string())).await;
    let engine = LocalWhisperEngine::new(&server.base_url);

    let error = engine
        .transcribe(&clip(), Language::English, "medium")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        TranscriptionError::InvalidResponse {
            language: Language::English,
            ..
        }
    ));
}

#[tokio::test]
async fn given_unreachable_backend_when_transcribing_then_returns_request_failed() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let engine = LocalWhisperEngine::new(&base_url);
    let error = engine
        .transcribe(&clip(), Language::English, "medium")
        .await
        .unwrap_err();

    assert!(matches!(error, TranscriptionError::RequestFailed { .. }));
    assert_eq!(error.language(), Language::English);
}
