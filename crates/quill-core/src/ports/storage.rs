//! Key-value blob storage port.

use async_trait::async_trait;
use thiserror::Error;

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(String),

    #[error("snapshot serialization failed: {0}")]
    Serialize(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err.to_string())
    }
}

/// Durable key-value blob storage.
///
/// Each key names one independent JSON blob. The stores write whole
/// snapshots, never partial updates, so `put` must replace the previous
/// value atomically from the reader's point of view.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the blob stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the blob stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
