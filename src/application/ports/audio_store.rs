use std::io;

use bytes::Bytes;

use crate::domain::StorageKey;

/// Durable store for artifact bytes, keyed by an opaque storage key.
#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    async fn put(&self, key: &StorageKey, bytes: Bytes) -> Result<u64, AudioStoreError>;

    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, AudioStoreError>;

    async fn delete(&self, key: &StorageKey) -> Result<(), AudioStoreError>;

    async fn exists(&self, key: &StorageKey) -> Result<bool, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
