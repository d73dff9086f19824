use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ArtifactRepository, RepositoryError};
use crate::domain::{ArtifactId, AudioArtifact, OwnerId};

/// Fully functional in-memory repository for tests and local experiments.
#[derive(Default)]
pub struct InMemoryArtifactRepository {
    records: Mutex<Vec<AudioArtifact>>,
}

impl InMemoryArtifactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AudioArtifact>> {
        // Lock poisoning only happens if a holder panicked; the data is
        // plain records, so continue with whatever is there.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifactRepository {
    async fn create(&self, artifact: &AudioArtifact) -> Result<(), RepositoryError> {
        self.lock().push(artifact.clone());
        Ok(())
    }

    async fn get(&self, id: ArtifactId) -> Result<Option<AudioArtifact>, RepositoryError> {
        Ok(self.lock().iter().find(|a| a.id == id).cloned())
    }

    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<AudioArtifact>, RepositoryError> {
        let mut artifacts: Vec<AudioArtifact> = self
            .lock()
            .iter()
            .filter(|a| a.owner_id == owner)
            .cloned()
            .collect();
        artifacts.sort_by_key(|a| a.created_at);
        Ok(artifacts)
    }

    async fn rename(&self, id: ArtifactId, new_filename: &str) -> Result<(), RepositoryError> {
        let mut records = self.lock();
        match records.iter_mut().find(|a| a.id == id) {
            Some(artifact) => {
                artifact.filename = new_filename.to_string();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id.as_uuid().to_string())),
        }
    }

    async fn delete(&self, id: ArtifactId) -> Result<(), RepositoryError> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|a| a.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }
        Ok(())
    }
}
