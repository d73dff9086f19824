use async_trait::async_trait;

use crate::domain::OwnerId;

/// Opaque identity collaborator. The pipeline only ever asks whether an
/// owner exists; it never creates or mutates identities.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn exists(&self, owner: OwnerId) -> Result<bool, IdentityError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity lookup failed: {0}")]
    LookupFailed(String),
}
