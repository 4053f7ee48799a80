use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioClip, Candidate, Language, TARGET_LANGUAGES};

/// Transcribes one clip into every target language concurrently.
pub struct TranscriptionFanOut<E>
where
    E: TranscriptionEngine,
{
    engine: Arc<E>,
    languages: Vec<Language>,
    default_model: String,
}

impl<E> TranscriptionFanOut<E>
where
    E: TranscriptionEngine,
{
    pub fn new(engine: Arc<E>, default_model: String) -> Self {
        Self::with_languages(engine, TARGET_LANGUAGES.to_vec(), default_model)
    }

    pub fn with_languages(engine: Arc<E>, languages: Vec<Language>, default_model: String) -> Self {
        Self {
            engine,
            languages,
            default_model,
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Falls back to the default model when `requested` is absent or blank.
    pub fn resolve_model<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.default_model)
    }

    /// Returns one candidate per language in language order. The first failing
    /// language fails the whole call and the remaining requests are dropped.
    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    pub async fn transcribe_all(
        &self,
        audio: &AudioClip,
        model: Option<&str>,
    ) -> Result<Vec<Candidate>, TranscriptionError> {
        let model = self.resolve_model(model);

        let requests = self
            .languages
            .iter()
            .map(|&language| self.engine.transcribe(audio, language, model));

        let candidates = try_join_all(requests).await.inspect_err(|e| {
            tracing::warn!(language = %e.language(), error = %e, "Transcription fan-out aborted");
        })?;

        tracing::info!(
            model = %model,
            candidates = candidates.len(),
            "Transcription fan-out completed"
        );

        Ok(candidates)
    }
}
