use std::sync::Arc;

use bytes::Bytes;
use futures::stream;

use triscribe::application::ports::UploadStore;
use triscribe::application::services::{
    EvaluationService, PipelineError, TranscribeAndMergeService, TranscriptionFanOut,
};
use triscribe::domain::{Language, PipelineStage, UploadId, UploadPath};
use triscribe::infrastructure::audio::MockTranscriptionEngine;
use triscribe::infrastructure::llm::MockLlmClient;
use triscribe::infrastructure::storage::LocalUploadStore;

fn create_service(
    store: Arc<dyn UploadStore>,
    llm_reply: Option<&str>,
) -> TranscribeAndMergeService<MockTranscriptionEngine, MockLlmClient> {
    let llm = match llm_reply {
        Some(reply) => MockLlmClient::new(reply),
        None => MockLlmClient::default(),
    };
    TranscribeAndMergeService::new(
        store,
        TranscriptionFanOut::new(Arc::new(MockTranscriptionEngine), "medium".to_string()),
        EvaluationService::new(Arc::new(llm), false),
    )
}

async fn stage(store: &Arc<dyn UploadStore>) -> UploadPath {
    let path = UploadPath::new(&UploadId::new(), "clip.wav");
    let chunks = vec![Ok(Bytes::from_static(b"audio"))];
    store
        .store(&path, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();
    path
}

#[tokio::test]
async fn given_staged_audio_when_running_then_returns_candidates_and_evaluation() {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn UploadStore> =
        Arc::new(LocalUploadStore::new(dir.path().to_path_buf()).unwrap());
    let path = stage(&store).await;
    let service = create_service(Arc::clone(&store), None);

    let outcome = service.run(&path, None).await.unwrap();

    let languages: Vec<Language> = outcome.candidates.iter().map(|c| c.lang).collect();
    assert_eq!(
        languages,
        vec![Language::Japanese, Language::English, Language::Chinese]
    );
    assert_eq!(outcome.candidates[1].text, "en transcript");
    assert!(outcome.evaluation.merged.is_some());
}

#[tokio::test]
async fn given_missing_upload_when_running_then_fails_in_received_stage() {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn UploadStore> =
        Arc::new(LocalUploadStore::new(dir.path().to_path_buf()).unwrap());
    let service = create_service(store, None);
    let path = UploadPath::new(&UploadId::new(), "never-staged.wav");

    let error = service.run(&path, None).await.unwrap_err();

    assert!(matches!(error, PipelineError::Upload(_)));
    assert_eq!(error.stage(), PipelineStage::Received);
}

#[tokio::test]
async fn given_unparseable_evaluation_when_running_then_fails_in_evaluating_stage() {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn UploadStore> =
        Arc::new(LocalUploadStore::new(dir.path().to_path_buf()).unwrap());
    let path = stage(&store).await;
    let service = create_service(Arc::clone(&store), Some("nope"));

    let error = service.run(&path, None).await.unwrap_err();

    assert!(matches!(error, PipelineError::Evaluation(_)));
    assert_eq!(error.stage(), PipelineStage::Evaluating);
}

#[test]
fn given_terminal_stages_when_checked_then_only_done_and_failed_are_terminal() {
    assert!(PipelineStage::Done.is_terminal());
    assert!(PipelineStage::Failed.is_terminal());
    assert!(!PipelineStage::Transcribing.is_terminal());
    assert_eq!(PipelineStage::Evaluating.to_string(), "EVALUATING");
}
