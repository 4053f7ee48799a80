use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TRANSCRIBE_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "medium";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub evaluation: EvaluationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<String>,
    pub max_upload_size_bytes: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub base_url: String,
    pub default_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationSettings {
    pub strict_schema: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] ConfigError),
    #[error("llm api key is not configured (set OPENAI_API_KEY)")]
    MissingApiKey,
}

impl Settings {
    /// Built-in defaults. `llm.api_key` defaults to blank, which [`Settings::from_config`]
    /// rejects.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("server.static_dir", "public")?
            .set_default("server.max_upload_size_bytes", DEFAULT_MAX_UPLOAD_SIZE_BYTES)?
            .set_default("storage.upload_dir", "tmp")?
            .set_default("transcription.base_url", DEFAULT_TRANSCRIBE_BASE_URL)?
            .set_default("transcription.default_model", DEFAULT_TRANSCRIPTION_MODEL)?
            .set_default("llm.api_key", "")?
            .set_default("llm.chat_model", DEFAULT_CHAT_MODEL)?
            .set_default("evaluation.strict_schema", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }

    /// Layers defaults, `config/{environment}`, `APP_*` variables and finally
    /// `LOCAL_TRANSCRIBE_BASE_URL`, `PORT` and `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(File::with_name(&environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option(
                "transcription.base_url",
                std::env::var("LOCAL_TRANSCRIBE_BASE_URL").ok(),
            )?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("llm.api_key", std::env::var("OPENAI_API_KEY").ok())?;

        Self::from_config(builder.build()?)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;

        if settings.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }

        Ok(settings)
    }
}
