use async_trait::async_trait;

use crate::domain::{AudioClip, Candidate, Language};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribes `audio` as `language` with the given backend model.
    async fn transcribe(
        &self,
        audio: &AudioClip,
        language: Language,
        model: &str,
    ) -> Result<Candidate, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription request for {language} failed: {reason}")]
    RequestFailed { language: Language, reason: String },
    #[error("transcription for {language} returned status {status}: {body}")]
    UpstreamStatus {
        language: Language,
        status: u16,
        body: String,
    },
    #[error("invalid transcription response for {language}: {reason}")]
    InvalidResponse { language: Language, reason: String },
}

impl TranscriptionError {
    pub fn language(&self) -> Language {
        match self {
            TranscriptionError::RequestFailed { language, .. }
            | TranscriptionError::UpstreamStatus { language, .. }
            | TranscriptionError::InvalidResponse { language, .. } => *language,
        }
    }
}
