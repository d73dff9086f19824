use std::sync::Arc;

use crate::application::ports::{
    ArtifactRepository, AudioStore, AudioStoreError, IdentityError, IdentityProvider,
    RepositoryError,
};
use crate::domain::{ArtifactId, AudioArtifact, OwnerId};

/// Artifact lifecycle operations exposed to the transport layer. Every
/// mutating operation checks owner-matching before touching the stores.
pub struct LibraryService {
    identity: Arc<dyn IdentityProvider>,
    repository: Arc<dyn ArtifactRepository>,
    audio_store: Arc<dyn AudioStore>,
}

impl LibraryService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        repository: Arc<dyn ArtifactRepository>,
        audio_store: Arc<dyn AudioStore>,
    ) -> Self {
        Self {
            identity,
            repository,
            audio_store,
        }
    }

    #[tracing::instrument(skip(self), fields(owner_id = %owner.as_uuid()))]
    pub async fn list_artifacts(
        &self,
        owner: OwnerId,
    ) -> Result<Vec<AudioArtifact>, LibraryError> {
        if !self.identity.exists(owner).await? {
            return Err(LibraryError::OwnerNotFound);
        }
        self.repository
            .list_by_owner(owner)
            .await
            .map_err(LibraryError::from)
    }

    #[tracing::instrument(skip(self, new_name), fields(artifact_id = %id.as_uuid()))]
    pub async fn rename_artifact(
        &self,
        id: ArtifactId,
        owner: OwnerId,
        new_name: &str,
    ) -> Result<AudioArtifact, LibraryError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(LibraryError::InvalidName("name must not be empty".into()));
        }

        let mut artifact = self.owned_artifact(id, owner).await?;

        // Display name only; the storage key (and the bytes behind it) is
        // immutable after creation.
        self.repository.rename(id, name).await?;
        artifact.filename = name.to_string();
        Ok(artifact)
    }

    #[tracing::instrument(skip(self), fields(artifact_id = %id.as_uuid()))]
    pub async fn delete_artifact(&self, id: ArtifactId, owner: OwnerId) -> Result<(), LibraryError> {
        let artifact = self.owned_artifact(id, owner).await?;

        // Bytes first. Already-missing bytes count as deleted; any other
        // failure aborts with both metadata and bytes intact.
        match self.audio_store.delete(&artifact.storage_key).await {
            Ok(()) | Err(AudioStoreError::NotFound(_)) => {}
            Err(e) => return Err(LibraryError::Storage(e.to_string())),
        }

        self.repository.delete(id).await?;
        tracing::info!(storage_key = %artifact.storage_key, "Artifact deleted");
        Ok(())
    }

    async fn owned_artifact(
        &self,
        id: ArtifactId,
        owner: OwnerId,
    ) -> Result<AudioArtifact, LibraryError> {
        let artifact = self
            .repository
            .get(id)
            .await?
            .ok_or(LibraryError::NotFound)?;

        if artifact.owner_id != owner {
            return Err(LibraryError::NotOwned);
        }
        Ok(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("owner not found")]
    OwnerNotFound,
    #[error("identity: {0}")]
    Identity(#[from] IdentityError),
    #[error("artifact not found")]
    NotFound,
    #[error("artifact belongs to a different owner")]
    NotOwned,
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<RepositoryError> for LibraryError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(_) => LibraryError::NotFound,
            other => LibraryError::Storage(other.to_string()),
        }
    }
}
