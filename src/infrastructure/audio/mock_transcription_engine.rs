use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioClip, Candidate, Language};

/// Answers every language with `"{code} transcript"`.
pub struct MockTranscriptionEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio: &AudioClip,
        language: Language,
        _model: &str,
    ) -> Result<Candidate, TranscriptionError> {
        let text = format!("{} transcript", language.code());
        let raw = serde_json::json!({ "text": text, "language": language.code() });
        Ok(Candidate::new(language, text, raw))
    }
}
