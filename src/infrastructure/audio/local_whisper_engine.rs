use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioClip, Candidate, Language};

/// Client for a faster-whisper server exposing the OpenAI transcription route.
pub struct LocalWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl LocalWhisperEngine {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/v1/audio/transcriptions",
                base_url.trim_end_matches('/')
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranscriptionEngine for LocalWhisperEngine {
    async fn transcribe(
        &self,
        audio: &AudioClip,
        language: Language,
        model: &str,
    ) -> Result<Candidate, TranscriptionError> {
        // `Bytes` clones share the buffer, so the three requests reuse one copy.
        let file_part =
            multipart::Part::stream_with_length(audio.data.clone(), audio.data.len() as u64)
                .file_name(audio.file_name.clone());

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", model.to_string())
            .text("language", language.code())
            .text("response_format", "json");

        tracing::debug!(%language, model = %model, "Sending audio to local transcription service");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed {
                language,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::UpstreamStatus {
                language,
                status: status.as_u16(),
                body,
            });
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| {
            TranscriptionError::InvalidResponse {
                language,
                reason: e.to_string(),
            }
        })?;

        let text = raw
            .get("text")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        tracing::info!(%language, chars = text.len(), "Transcription completed");

        Ok(Candidate::new(language, text, raw))
    }
}
