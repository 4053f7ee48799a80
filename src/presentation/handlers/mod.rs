mod health;
mod transcribe_and_merge;

pub use health::health_handler;
pub use transcribe_and_merge::{
    AUDIO_FIELD, AUDIO_REQUIRED_MESSAGE, ErrorResponse, MODEL_FIELD, PIPELINE_FAILED_MESSAGE,
    UPLOAD_TOO_LARGE_MESSAGE, transcribe_and_merge_handler,
};
