use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ArtifactRepository, RepositoryError};
use crate::domain::{ArtifactId, AudioArtifact, OwnerId, SourceKind, StorageKey};

pub struct SqliteArtifactRepository {
    pool: SqlitePool,
}

impl SqliteArtifactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the artifacts table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS artifacts (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                filename TEXT NOT NULL,
                source_kind TEXT NOT NULL,
                storage_key TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_artifacts_owner ON artifacts(owner_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    fn row_to_artifact(row: &sqlx::sqlite::SqliteRow) -> Result<AudioArtifact, RepositoryError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let filename: String = row
            .try_get("filename")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let source_kind: String = row
            .try_get("source_kind")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let storage_key: String = row
            .try_get("storage_key")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(AudioArtifact {
            id: ArtifactId::from_uuid(
                Uuid::parse_str(&id).map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ),
            owner_id: OwnerId::from_uuid(
                Uuid::parse_str(&owner_id)
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?,
            ),
            filename,
            source_kind: source_kind
                .parse::<SourceKind>()
                .map_err(RepositoryError::QueryFailed)?,
            storage_key: StorageKey::from_raw(storage_key),
            created_at,
        })
    }
}

#[async_trait]
impl ArtifactRepository for SqliteArtifactRepository {
    #[instrument(skip(self, artifact), fields(artifact_id = %artifact.id.as_uuid()))]
    async fn create(&self, artifact: &AudioArtifact) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO artifacts (id, owner_id, filename, source_kind, storage_key, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(artifact.id.as_uuid().to_string())
        .bind(artifact.owner_id.as_uuid().to_string())
        .bind(&artifact.filename)
        .bind(artifact.source_kind.as_str())
        .bind(artifact.storage_key.as_str())
        .bind(artifact.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(artifact_id = %id.as_uuid()))]
    async fn get(&self, id: ArtifactId) -> Result<Option<AudioArtifact>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM artifacts WHERE id = ?1")
            .bind(id.as_uuid().to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.as_ref().map(Self::row_to_artifact).transpose()
    }

    #[instrument(skip(self), fields(owner_id = %owner.as_uuid()))]
    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<AudioArtifact>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM artifacts WHERE owner_id = ?1 ORDER BY created_at")
            .bind(owner.as_uuid().to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(Self::row_to_artifact).collect()
    }

    #[instrument(skip(self, new_filename), fields(artifact_id = %id.as_uuid()))]
    async fn rename(&self, id: ArtifactId, new_filename: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE artifacts SET filename = ?1 WHERE id = ?2")
            .bind(new_filename)
            .bind(id.as_uuid().to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(artifact_id = %id.as_uuid()))]
    async fn delete(&self, id: ArtifactId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM artifacts WHERE id = ?1")
            .bind(id.as_uuid().to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }
        Ok(())
    }
}
