#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use semporna::application::ports::{
    ArtifactRepository, ExtractionError, RepositoryError, SpeechEngine, SynthesisError,
    TextExtractor, TranslationError, Translator,
};
use semporna::domain::{ArtifactId, AudioArtifact, ContentPayload, OwnerId};

/// Extractor double: yields a fixed text, or fails when none is configured.
pub struct StubExtractor {
    text: Option<String>,
}

impl StubExtractor {
    pub fn yielding(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract(&self, _payload: &ContentPayload) -> Result<String, ExtractionError> {
        self.text
            .clone()
            .ok_or_else(|| ExtractionError::CorruptDocument("injected failure".to_string()))
    }
}

/// Translator double that counts invocations.
pub struct CountingTranslator {
    calls: AtomicUsize,
    result: Option<String>,
}

impl CountingTranslator {
    pub fn yielding(text: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            result: None,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for CountingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _target_language: &str,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .ok_or_else(|| TranslationError::Unavailable("injected failure".to_string()))
    }
}

/// Engine double that records the last synthesized text.
pub struct RecordingEngine {
    output: Option<Vec<u8>>,
    last_text: Mutex<Option<String>>,
}

impl RecordingEngine {
    pub fn yielding(output: &[u8]) -> Self {
        Self {
            output: Some(output.to_vec()),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: None,
            last_text: Mutex::new(None),
        }
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechEngine for RecordingEngine {
    async fn synthesize(
        &self,
        text: &str,
        _voice_id: &str,
        _language: &str,
    ) -> Result<Vec<u8>, SynthesisError> {
        *self.last_text.lock().unwrap() = Some(text.to_string());
        self.output
            .clone()
            .ok_or_else(|| SynthesisError::Unavailable("injected failure".to_string()))
    }
}

/// Repository double whose writes always fail, for persistence-stage
/// failure injection.
pub struct FailingRepository;

#[async_trait]
impl ArtifactRepository for FailingRepository {
    async fn create(&self, _artifact: &AudioArtifact) -> Result<(), RepositoryError> {
        Err(RepositoryError::QueryFailed("injected failure".to_string()))
    }

    async fn get(&self, _id: ArtifactId) -> Result<Option<AudioArtifact>, RepositoryError> {
        Ok(None)
    }

    async fn list_by_owner(&self, _owner: OwnerId) -> Result<Vec<AudioArtifact>, RepositoryError> {
        Ok(vec![])
    }

    async fn rename(&self, _id: ArtifactId, _new_filename: &str) -> Result<(), RepositoryError> {
        Err(RepositoryError::QueryFailed("injected failure".to_string()))
    }

    async fn delete(&self, _id: ArtifactId) -> Result<(), RepositoryError> {
        Err(RepositoryError::QueryFailed("injected failure".to_string()))
    }
}

/// Repository double whose `create` signals entry and then never resolves,
/// for cancelling a conversion between the byte write and the metadata write.
pub struct StalledRepository {
    entered: tokio::sync::Notify,
}

impl StalledRepository {
    pub fn new() -> Self {
        Self {
            entered: tokio::sync::Notify::new(),
        }
    }

    pub async fn wait_until_create(&self) {
        self.entered.notified().await;
    }
}

#[async_trait]
impl ArtifactRepository for StalledRepository {
    async fn create(&self, _artifact: &AudioArtifact) -> Result<(), RepositoryError> {
        self.entered.notify_one();
        std::future::pending().await
    }

    async fn get(&self, _id: ArtifactId) -> Result<Option<AudioArtifact>, RepositoryError> {
        Ok(None)
    }

    async fn list_by_owner(&self, _owner: OwnerId) -> Result<Vec<AudioArtifact>, RepositoryError> {
        Ok(vec![])
    }

    async fn rename(&self, _id: ArtifactId, _new_filename: &str) -> Result<(), RepositoryError> {
        Err(RepositoryError::QueryFailed("injected failure".to_string()))
    }

    async fn delete(&self, _id: ArtifactId) -> Result<(), RepositoryError> {
        Err(RepositoryError::QueryFailed("injected failure".to_string()))
    }
}

/// Number of regular files under a directory, for asserting that failed
/// conversions leave no bytes behind.
pub fn file_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(Result::ok).count())
        .unwrap_or(0)
}
