use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{
    LlmClient, TranscriptionEngine, TranscriptionError, UploadStore, UploadStoreError,
};
use crate::domain::{AudioClip, Candidate, Evaluation, PipelineStage, UploadPath};

use super::evaluation_service::{EvaluationError, EvaluationService};
use super::transcription_fan_out::TranscriptionFanOut;

/// Runs the transcription fan-out on a staged upload and feeds the result to
/// the evaluator.
pub struct TranscribeAndMergeService<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    upload_store: Arc<dyn UploadStore>,
    fan_out: TranscriptionFanOut<E>,
    evaluation: EvaluationService<L>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeOutcome {
    pub candidates: Vec<Candidate>,
    pub evaluation: Evaluation,
}

impl<E, L> TranscribeAndMergeService<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    pub fn new(
        upload_store: Arc<dyn UploadStore>,
        fan_out: TranscriptionFanOut<E>,
        evaluation: EvaluationService<L>,
    ) -> Self {
        Self {
            upload_store,
            fan_out,
            evaluation,
        }
    }

    #[tracing::instrument(skip(self, upload), fields(upload = %upload))]
    pub async fn run(
        &self,
        upload: &UploadPath,
        model: Option<&str>,
    ) -> Result<MergeOutcome, PipelineError> {
        let data = self
            .upload_store
            .fetch(upload)
            .await
            .map_err(PipelineError::Upload)?;
        let audio = AudioClip::new(upload.as_str(), data);

        tracing::debug!(stage = %PipelineStage::Transcribing, bytes = audio.len(), "Audio loaded");
        let candidates = self
            .fan_out
            .transcribe_all(&audio, model)
            .await
            .map_err(PipelineError::Transcription)?;

        tracing::debug!(stage = %PipelineStage::Evaluating, "Candidates ready");
        let evaluation = self
            .evaluation
            .evaluate(&candidates)
            .await
            .map_err(PipelineError::Evaluation)?;

        tracing::debug!(stage = %PipelineStage::Done, "Merge completed");
        Ok(MergeOutcome {
            candidates,
            evaluation,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("upload: {0}")]
    Upload(UploadStoreError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("evaluation: {0}")]
    Evaluation(EvaluationError),
}

impl PipelineError {
    /// Stage the request was in when it failed.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Upload(_) => PipelineStage::Received,
            PipelineError::Transcription(_) => PipelineStage::Transcribing,
            PipelineError::Evaluation(_) => PipelineStage::Evaluating,
        }
    }
}
