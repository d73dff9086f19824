use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::application::ports::{IdentityError, IdentityProvider};
use crate::domain::OwnerId;

/// Identity collaborator backed by the users table in the same database.
pub struct SqliteIdentityProvider {
    pool: SqlitePool,
}

impl SqliteIdentityProvider {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), IdentityError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| IdentityError::LookupFailed(e.to_string()))?;
        Ok(())
    }

    /// Register the owner if it is not known yet. Used by the CLI shell;
    /// the conversion core itself never creates identities.
    pub async fn ensure_exists(&self, owner: OwnerId) -> Result<(), IdentityError> {
        sqlx::query("INSERT OR IGNORE INTO users (id, created_at) VALUES (?1, ?2)")
            .bind(owner.as_uuid().to_string())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| IdentityError::LookupFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for SqliteIdentityProvider {
    async fn exists(&self, owner: OwnerId) -> Result<bool, IdentityError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE id = ?1")
            .bind(owner.as_uuid().to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| IdentityError::LookupFailed(e.to_string()))?;
        Ok(row.is_some())
    }
}
