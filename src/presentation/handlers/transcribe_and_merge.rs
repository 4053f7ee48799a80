use std::io;
use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::application::ports::{LlmClient, TranscriptionEngine, UploadStoreError};
use crate::application::services::StagedUpload;
use crate::domain::{PipelineStage, UploadId, UploadPath};
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";
pub const MODEL_FIELD: &str = "model";
pub const AUDIO_REQUIRED_MESSAGE: &str = "Audio file is required";
pub const PIPELINE_FAILED_MESSAGE: &str = "Transcription or merge failed";
pub const UPLOAD_TOO_LARGE_MESSAGE: &str = "Audio file exceeds the upload size limit";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 413 when the body hit the size limit, 400 for any other unreadable body.
fn unreadable_body_response(status: StatusCode, detail: impl std::fmt::Display) -> Response {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        error_response(StatusCode::PAYLOAD_TOO_LARGE, UPLOAD_TOO_LARGE_MESSAGE)
    } else {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to read multipart: {}", detail),
        )
    }
}

fn staging_failure_response(error: &UploadStoreError) -> Response {
    match error {
        UploadStoreError::Io(io_error) => {
            let status = io_error
                .get_ref()
                .and_then(|source| source.downcast_ref::<MultipartError>())
                .map_or(StatusCode::BAD_REQUEST, MultipartError::status);
            tracing::warn!(error = %io_error, "Audio upload ended before it was complete");
            unreadable_body_response(status, io_error)
        }
        other => {
            tracing::error!(
                error = %other,
                stage = %PipelineStage::Failed,
                "Failed to stage audio upload"
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PIPELINE_FAILED_MESSAGE)
        }
    }
}

/// `POST /api/transcribe-and-merge`: multipart `audio` file plus an optional
/// `model` text field. A body that is not multipart carries no audio either.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_and_merge_handler<E, L>(
    State(state): State<AppState<E, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static,
    L: LlmClient + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Transcribe request is not multipart");
            return error_response(StatusCode::BAD_REQUEST, AUDIO_REQUIRED_MESSAGE);
        }
    };

    let mut staged: Option<StagedUpload> = None;
    let mut model: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                if let Some(upload) = staged {
                    upload.release().await;
                }
                return unreadable_body_response(e.status(), &e);
            }
        };

        let name = field.name().unwrap_or_default().to_string();

        if name == AUDIO_FIELD && staged.is_none() {
            // Only file parts count as audio; a plain text `audio` field is ignored.
            let Some(file_name) = field.file_name().map(str::to_string) else {
                continue;
            };

            tracing::debug!(
                filename = %file_name,
                content_type = ?field.content_type(),
                "Receiving audio upload"
            );

            let path = UploadPath::new(&UploadId::new(), &file_name);
            let stream = field.map_err(io::Error::other).boxed();

            match StagedUpload::stage(Arc::clone(&state.upload_store), path, stream).await {
                Ok(upload) => staged = Some(upload),
                Err(e) => return staging_failure_response(&e),
            }
        } else if name == MODEL_FIELD {
            match field.text().await {
                Ok(text) => model = Some(text),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read model field");
                    if let Some(upload) = staged {
                        upload.release().await;
                    }
                    return unreadable_body_response(e.status(), &e);
                }
            }
        }
    }

    let Some(upload) = staged else {
        tracing::warn!("Transcribe request without audio file");
        return error_response(StatusCode::BAD_REQUEST, AUDIO_REQUIRED_MESSAGE);
    };

    tracing::info!(
        stage = %PipelineStage::Received,
        upload = %upload.path(),
        bytes = upload.size(),
        model = ?model,
        "Audio received"
    );

    let result = state
        .merge_service
        .run(upload.path(), model.as_deref())
        .await;

    upload.release().await;

    match result {
        Ok(outcome) => {
            tracing::info!(
                stage = %PipelineStage::Done,
                candidates = outcome.candidates.len(),
                "Transcribe and merge succeeded"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                failed_during = %e.stage(),
                stage = %PipelineStage::Failed,
                "Transcribe and merge failed"
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PIPELINE_FAILED_MESSAGE)
        }
    }
}
