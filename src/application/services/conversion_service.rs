use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    ArtifactRepository, AudioStore, ExtractionError, IdentityError, IdentityProvider,
    SpeechEngine, SynthesisError, TextExtractor, TranslationError, Translator,
};
use crate::domain::{AudioArtifact, ConversionRequest, StorageKey};

use super::engine_registry::EngineRegistry;
use super::voice_catalog::VoiceCatalog;

/// Orchestrates one conversion request end to end: validate, authorize,
/// extract, translate, resolve the voice, synthesize, persist.
///
/// Stages run strictly sequentially; any failure short-circuits the rest and
/// leaves the stores unchanged, so callers may safely retry the whole call.
pub struct ConversionService {
    identity: Arc<dyn IdentityProvider>,
    extractor: Arc<dyn TextExtractor>,
    translator: Arc<dyn Translator>,
    catalog: VoiceCatalog,
    engines: EngineRegistry,
    audio_store: Arc<dyn AudioStore>,
    repository: Arc<dyn ArtifactRepository>,
}

impl ConversionService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        extractor: Arc<dyn TextExtractor>,
        translator: Arc<dyn Translator>,
        catalog: VoiceCatalog,
        engines: EngineRegistry,
        audio_store: Arc<dyn AudioStore>,
        repository: Arc<dyn ArtifactRepository>,
    ) -> Self {
        Self {
            identity,
            extractor,
            translator,
            catalog,
            engines,
            audio_store,
            repository,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            owner_id = %request.owner_id.as_uuid(),
            source_kind = %request.payload.kind(),
        )
    )]
    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<AudioArtifact, ConversionError> {
        request
            .validate()
            .map_err(|e| ConversionError::InvalidInput(e.to_string()))?;

        // Owner check comes before any extraction or external-service work so
        // an invalid owner never costs a translation or synthesis call.
        if !self.identity.exists(request.owner_id).await? {
            return Err(ConversionError::OwnerNotFound);
        }

        let source_kind = request.payload.kind();
        let text = self.extractor.extract(&request.payload).await?;
        tracing::debug!(chars = text.len(), "Extraction complete");

        let language = request.normalized_language();
        // Fast path: "en" skips the translation collaborator entirely.
        let text = if language == "en" {
            text
        } else {
            self.translator.translate(&text, &language).await?
        };

        let profile = self.catalog.resolve(&request.voice_selector);
        let engine = self.engines.engine_for(profile.engine).ok_or_else(|| {
            ConversionError::Synthesis(SynthesisError::Unavailable(format!(
                "no engine registered for {}",
                profile.engine.as_str()
            )))
        })?;

        tracing::debug!(
            engine = profile.engine.as_str(),
            voice_id = profile.voice_id,
            "Voice resolved"
        );
        let audio = engine
            .synthesize(&text, profile.voice_id, &language)
            .await?;

        self.persist(&request, source_kind, audio).await
    }

    /// Write bytes first, create the metadata record only after a successful
    /// write. If the record cannot be created, or the caller aborts between
    /// the two steps, the written bytes are rolled back.
    async fn persist(
        &self,
        request: &ConversionRequest,
        source_kind: crate::domain::SourceKind,
        audio: Vec<u8>,
    ) -> Result<AudioArtifact, ConversionError> {
        let key = StorageKey::generate();
        let size = self
            .audio_store
            .put(&key, Bytes::from(audio))
            .await
            .map_err(|e| ConversionError::Storage(e.to_string()))?;

        let guard = StoredBytesGuard::new(Arc::clone(&self.audio_store), key.clone());

        let artifact = AudioArtifact::new(
            request.owner_id,
            key.as_str().to_string(),
            source_kind,
            key.clone(),
        );

        match self.repository.create(&artifact).await {
            Ok(()) => {
                guard.commit();
                tracing::info!(
                    artifact_id = %artifact.id.as_uuid(),
                    storage_key = %key,
                    bytes = size,
                    "Conversion completed"
                );
                Ok(artifact)
            }
            Err(e) => {
                guard.commit();
                if let Err(del_err) = self.audio_store.delete(&key).await {
                    tracing::warn!(
                        error = %del_err,
                        storage_key = %key,
                        "Failed to roll back audio bytes after metadata failure"
                    );
                }
                Err(ConversionError::Storage(e.to_string()))
            }
        }
    }
}

/// Rollback guard for bytes written before their metadata record exists.
/// Dropped without `commit` (metadata failure is handled inline; this covers
/// caller abort), it deletes the written object so nothing is orphaned.
struct StoredBytesGuard {
    store: Arc<dyn AudioStore>,
    key: Option<StorageKey>,
}

impl StoredBytesGuard {
    fn new(store: Arc<dyn AudioStore>, key: StorageKey) -> Self {
        Self {
            store,
            key: Some(key),
        }
    }

    fn commit(mut self) {
        self.key = None;
    }
}

impl Drop for StoredBytesGuard {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            let store = Arc::clone(&self.store);
            tokio::spawn(async move {
                if let Err(e) = store.delete(&key).await {
                    tracing::warn!(
                        error = %e,
                        storage_key = %key,
                        "Failed to roll back audio bytes after aborted conversion"
                    );
                }
            });
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid request: {0}")]
    InvalidInput(String),
    #[error("owner not found")]
    OwnerNotFound,
    #[error("identity: {0}")]
    Identity(#[from] IdentityError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("translation: {0}")]
    Translation(#[from] TranslationError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("storage failure: {0}")]
    Storage(String),
}
