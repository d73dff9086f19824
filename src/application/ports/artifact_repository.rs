use async_trait::async_trait;

use crate::domain::{ArtifactId, AudioArtifact, OwnerId};

/// Metadata store for audio artifacts. Every write is transactional at
/// single-record granularity.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    async fn create(&self, artifact: &AudioArtifact) -> Result<(), RepositoryError>;

    async fn get(&self, id: ArtifactId) -> Result<Option<AudioArtifact>, RepositoryError>;

    /// Artifacts for one owner, ordered by creation time.
    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<AudioArtifact>, RepositoryError>;

    /// Update the display filename only; the storage key never changes.
    async fn rename(&self, id: ArtifactId, new_filename: &str) -> Result<(), RepositoryError>;

    async fn delete(&self, id: ArtifactId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
}
