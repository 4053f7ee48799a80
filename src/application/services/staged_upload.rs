use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::UploadPath;

/// An upload held in the [`UploadStore`] for the lifetime of one request.
///
/// [`StagedUpload::release`] deletes it. A guard dropped without being
/// released schedules the deletion on the current runtime instead. Delete
/// failures are logged and never returned.
pub struct StagedUpload {
    store: Arc<dyn UploadStore>,
    path: UploadPath,
    size: u64,
    released: bool,
}

impl StagedUpload {
    pub async fn stage(
        store: Arc<dyn UploadStore>,
        path: UploadPath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<Self, UploadStoreError> {
        match store.store(&path, stream).await {
            Ok(size) => {
                tracing::debug!(upload = %path, bytes = size, "Upload staged");
                Ok(Self {
                    store,
                    path,
                    size,
                    released: false,
                })
            }
            Err(e) => {
                // A failed write can still leave a partial file behind.
                if let Err(cleanup) = store.delete(&path).await {
                    tracing::debug!(
                        upload = %path,
                        error = %cleanup,
                        "Nothing to clean up after failed staging"
                    );
                }
                Err(e)
            }
        }
    }

    pub fn path(&self) -> &UploadPath {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub async fn release(mut self) {
        self.released = true;
        delete_quietly(self.store.as_ref(), &self.path).await;
    }
}

async fn delete_quietly(store: &dyn UploadStore, path: &UploadPath) {
    match store.delete(path).await {
        Ok(()) => tracing::debug!(upload = %path, "Staged upload removed"),
        Err(e) => tracing::warn!(upload = %path, error = %e, "Failed to remove staged upload"),
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(upload = %self.path, "No runtime to remove staged upload");
            return;
        };

        let store = Arc::clone(&self.store);
        let path = self.path.clone();
        handle.spawn(async move {
            delete_quietly(store.as_ref(), &path).await;
        });
    }
}
