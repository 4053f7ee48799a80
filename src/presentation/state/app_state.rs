use std::sync::Arc;

use crate::application::ports::{LlmClient, TranscriptionEngine, UploadStore};
use crate::application::services::TranscribeAndMergeService;
use crate::presentation::config::Settings;

pub struct AppState<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    pub merge_service: Arc<TranscribeAndMergeService<E, L>>,
    pub upload_store: Arc<dyn UploadStore>,
    pub settings: Settings,
}

impl<E, L> Clone for AppState<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            merge_service: Arc::clone(&self.merge_service),
            upload_store: Arc::clone(&self.upload_store),
            settings: self.settings.clone(),
        }
    }
}
