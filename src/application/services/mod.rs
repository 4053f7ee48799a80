mod evaluation_service;
mod prompt_builder;
mod staged_upload;
mod transcribe_and_merge_service;
mod transcription_fan_out;

pub use evaluation_service::{EvaluationError, EvaluationService, parse_evaluation};
pub use prompt_builder::{RESPONSE_SCHEMA, SYSTEM_PROMPT, build_user_prompt};
pub use staged_upload::StagedUpload;
pub use transcribe_and_merge_service::{MergeOutcome, PipelineError, TranscribeAndMergeService};
pub use transcription_fan_out::TranscriptionFanOut;
