use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use triscribe::application::ports::UploadStore;
use triscribe::application::services::{
    EvaluationService, TranscribeAndMergeService, TranscriptionFanOut,
};
use triscribe::infrastructure::audio::LocalWhisperEngine;
use triscribe::infrastructure::llm::OpenAiClient;
use triscribe::infrastructure::observability::{TracingConfig, init_tracing};
use triscribe::infrastructure::storage::LocalUploadStore;
use triscribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Refusing to start")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let upload_store: Arc<dyn UploadStore> = Arc::new(
        LocalUploadStore::new(PathBuf::from(&settings.storage.upload_dir))
            .context("Failed to prepare upload directory")?,
    );
    tracing::info!(upload_dir = %settings.storage.upload_dir, "Upload directory ready");

    let engine = Arc::new(LocalWhisperEngine::new(&settings.transcription.base_url));
    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.base_url.clone(),
        settings.llm.chat_model.clone(),
    ));

    let merge_service = Arc::new(TranscribeAndMergeService::new(
        Arc::clone(&upload_store),
        TranscriptionFanOut::new(engine, settings.transcription.default_model.clone()),
        EvaluationService::new(llm_client, settings.evaluation.strict_schema),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    tracing::info!(
        transcription_url = %settings.transcription.base_url,
        chat_model = %settings.llm.chat_model,
        static_dir = ?settings.server.static_dir,
        "Pipeline configured"
    );

    let state = AppState {
        merge_service,
        upload_store,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
