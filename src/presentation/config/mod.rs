mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_CHAT_MODEL, DEFAULT_MAX_UPLOAD_SIZE_BYTES, DEFAULT_PORT, DEFAULT_TRANSCRIBE_BASE_URL,
    DEFAULT_TRANSCRIPTION_MODEL, EvaluationSettings, LlmSettings, LoggingSettings, ServerSettings,
    Settings, SettingsError, StorageSettings, TranscriptionSettings,
};
