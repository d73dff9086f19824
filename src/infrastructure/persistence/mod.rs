mod in_memory_artifact_repository;
mod sqlite_artifact_repository;
mod sqlite_identity_provider;
mod sqlite_pool;
mod static_identity_provider;

pub use in_memory_artifact_repository::InMemoryArtifactRepository;
pub use sqlite_artifact_repository::SqliteArtifactRepository;
pub use sqlite_identity_provider::SqliteIdentityProvider;
pub use sqlite_pool::create_pool;
pub use static_identity_provider::StaticIdentityProvider;
