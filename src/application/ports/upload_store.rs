use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::UploadPath;

/// Temporary storage for uploaded audio while a request is being handled.
#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    /// Writes the stream to `path` and returns the number of bytes stored.
    async fn store(
        &self,
        path: &UploadPath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, UploadStoreError>;

    async fn fetch(&self, path: &UploadPath) -> Result<Bytes, UploadStoreError>;

    async fn delete(&self, path: &UploadPath) -> Result<(), UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("upload not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
