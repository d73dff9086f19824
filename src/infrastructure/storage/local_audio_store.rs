use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StorageKey;

/// Filesystem-backed audio byte store. Each artifact is one object; puts and
/// deletes are atomic at object granularity.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path).map_err(AudioStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn put(&self, key: &StorageKey, bytes: Bytes) -> Result<u64, AudioStoreError> {
        let store_path = StorePath::from(key.as_str());
        let size = bytes.len() as u64;
        self.inner
            .put(&store_path, PutPayload::from(bytes))
            .await
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(size)
    }

    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, AudioStoreError> {
        let store_path = StorePath::from(key.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => AudioStoreError::NotFound(key.to_string()),
            other => AudioStoreError::ReadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AudioStoreError::ReadFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), AudioStoreError> {
        let store_path = StorePath::from(key.as_str());
        self.inner.delete(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => AudioStoreError::NotFound(key.to_string()),
            other => AudioStoreError::DeleteFailed(other.to_string()),
        })
    }

    async fn exists(&self, key: &StorageKey) -> Result<bool, AudioStoreError> {
        let store_path = StorePath::from(key.as_str());
        match self.inner.head(&store_path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(AudioStoreError::ReadFailed(e.to_string())),
        }
    }
}
