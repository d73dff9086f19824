mod artifact;
mod ids;
mod request;
mod storage_key;
mod voice;

pub use artifact::{AudioArtifact, SourceKind};
pub use ids::{ArtifactId, OwnerId};
pub use request::{ContentPayload, ConversionRequest, RequestValidationError};
pub use storage_key::{StorageKey, AUDIO_EXTENSION};
pub use voice::{EngineKind, VoiceProfile};
