use std::io;

use bytes::Bytes;
use futures::stream;

use triscribe::application::ports::{UploadStore, UploadStoreError};
use triscribe::domain::{UploadId, UploadPath};
use triscribe::infrastructure::storage::LocalUploadStore;

fn create_test_store() -> (tempfile::TempDir, LocalUploadStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_chunked_stream_when_storing_then_file_lands_in_upload_dir() {
    let (dir, store) = create_test_store();
    let path = UploadPath::new(&UploadId::new(), "clip.wav");

    let chunks = vec![Ok(Bytes::from("RIFF")), Ok(Bytes::from("WAVE"))];
    let size = store
        .store(&path, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    assert_eq!(size, 8);
    let on_disk = std::fs::read(dir.path().join(path.as_str())).unwrap();
    assert_eq!(on_disk, b"RIFFWAVE");
}

#[tokio::test]
async fn given_stored_file_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let path = UploadPath::new(&UploadId::new(), "clip.wav");

    let content = b"audio content";
    let chunks = vec![Ok(Bytes::from(&content[..]))];
    store
        .store(&path, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, &content[..]);
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_fetch_returns_not_found() {
    let (dir, store) = create_test_store();
    let path = UploadPath::new(&UploadId::new(), "clip.wav");

    let chunks = vec![Ok(Bytes::from("data"))];
    store
        .store(&path, Box::pin(stream::iter(chunks)))
        .await
        .unwrap();

    store.delete(&path).await.unwrap();

    assert!(matches!(
        store.fetch(&path).await,
        Err(UploadStoreError::NotFound(_))
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_stream_error_when_storing_then_returns_io_error() {
    let (_dir, store) = create_test_store();
    let path = UploadPath::new(&UploadId::new(), "clip.wav");

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "network drop",
        )),
    ];

    let result = store.store(&path, Box::pin(stream::iter(chunks))).await;
    assert!(matches!(result, Err(UploadStoreError::Io(_))));
}

#[tokio::test]
async fn given_nonexistent_path_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = UploadPath::new(&UploadId::new(), "missing.wav");

    let result = store.fetch(&path).await;
    assert!(matches!(result, Err(UploadStoreError::NotFound(_))));
}

#[test]
fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("uploads").join("staging");

    let store = LocalUploadStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
}
