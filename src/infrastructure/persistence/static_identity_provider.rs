use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{IdentityError, IdentityProvider};
use crate::domain::OwnerId;

/// Identity collaborator over a fixed set of owners.
#[derive(Default)]
pub struct StaticIdentityProvider {
    owners: Mutex<HashSet<OwnerId>>,
}

impl StaticIdentityProvider {
    pub fn new(owners: impl IntoIterator<Item = OwnerId>) -> Self {
        Self {
            owners: Mutex::new(owners.into_iter().collect()),
        }
    }

    pub fn add(&self, owner: OwnerId) {
        self.owners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(owner);
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn exists(&self, owner: OwnerId) -> Result<bool, IdentityError> {
        Ok(self
            .owners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&owner))
    }
}
