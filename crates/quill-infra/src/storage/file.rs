//! File-backed storage backend.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use quill_core::ports::{StorageBackend, StorageError};

/// Durable key-value storage: one `<key>.json` file per key inside a
/// data directory.
///
/// Writes go to a sibling temp file first and are moved into place with
/// a rename, so an interrupted write never truncates the previous blob.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open (and create if needed) the data directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(io_error)?;
        tracing::debug!(dir = %dir.display(), "file storage opened");
        Ok(Self { dir })
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys name files directly, so anything that could escape the
        // data directory is refused.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::Io(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl StorageBackend for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.blob_path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await.map_err(io_error)?;
        fs::rename(&tmp, &path).await.map_err(io_error)?;
        tracing::debug!(key, bytes = value.len(), "blob written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}

fn io_error(err: std::io::Error) -> StorageError {
    if err.kind() == ErrorKind::StorageFull {
        StorageError::QuotaExceeded
    } else {
        StorageError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blobs_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = JsonFileStorage::open(dir.path()).await.unwrap();
            storage.put("allUsers", "[1,2,3]").await.unwrap();
        }
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        assert_eq!(
            storage.get("allUsers").await.unwrap(),
            Some("[1,2,3]".to_string())
        );
    }

    #[tokio::test]
    async fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        assert_eq!(storage.get("currentUser").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_deletes_the_blob_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        storage.put("currentUser", "{}").await.unwrap();
        storage.remove("currentUser").await.unwrap();
        storage.remove("currentUser").await.unwrap();
        assert_eq!(storage.get("currentUser").await.unwrap(), None);
    }

    #[tokio::test]
    async fn keys_that_could_escape_the_directory_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        assert!(storage.put("../evil", "x").await.is_err());
        assert!(storage.get("a/b").await.is_err());
        assert!(storage.put("", "x").await.is_err());
    }

    #[tokio::test]
    async fn put_replaces_the_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::open(dir.path()).await.unwrap();
        storage.put("posts", "old").await.unwrap();
        storage.put("posts", "new").await.unwrap();
        assert_eq!(storage.get("posts").await.unwrap(), Some("new".to_string()));
    }
}
