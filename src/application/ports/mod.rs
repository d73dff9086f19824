mod artifact_repository;
mod audio_store;
mod identity_provider;
mod speech_engine;
mod text_extractor;
mod translator;

pub use artifact_repository::{ArtifactRepository, RepositoryError};
pub use audio_store::{AudioStore, AudioStoreError};
pub use identity_provider::{IdentityError, IdentityProvider};
pub use speech_engine::{SpeechEngine, SynthesisError};
pub use text_extractor::{ExtractionError, TextExtractor};
pub use translator::{TranslationError, Translator};
