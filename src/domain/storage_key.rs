use std::fmt;

use uuid::Uuid;

/// Container extension shared by every synthesis engine, so downstream
/// consumers never branch on which voice produced a file. The extension is a
/// naming convention, not a container guarantee: the local engine emits
/// RIFF/WAV on stdout and those bytes are stored under the same extension.
pub const AUDIO_EXTENSION: &str = "mp3";

/// Opaque handle to an artifact's backing bytes in the audio store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    /// Generate a collision-free key. Keys are random, never content-derived,
    /// so two concurrent requests can never write under the same name.
    pub fn generate() -> Self {
        Self(format!("{}.{}", Uuid::new_v4(), AUDIO_EXTENSION))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
