use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::ids::{ArtifactId, OwnerId};
use super::storage_key::StorageKey;

/// The kind of content an artifact was converted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Text,
    Pdf,
    Image,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::Pdf => "pdf",
            SourceKind::Image => "image",
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SourceKind::Text),
            "pdf" => Ok(SourceKind::Pdf),
            "image" => Ok(SourceKind::Image),
            other => Err(format!("Invalid source kind: {}", other)),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted audio file plus its metadata record.
///
/// Created atomically with its backing bytes at the end of a successful
/// pipeline run. The backing bytes are immutable after creation; rename
/// changes the display filename only.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub id: ArtifactId,
    pub owner_id: OwnerId,
    pub filename: String,
    pub source_kind: SourceKind,
    pub storage_key: StorageKey,
    pub created_at: DateTime<Utc>,
}

impl AudioArtifact {
    pub fn new(
        owner_id: OwnerId,
        filename: String,
        source_kind: SourceKind,
        storage_key: StorageKey,
    ) -> Self {
        Self {
            id: ArtifactId::new(),
            owner_id,
            filename,
            source_kind,
            storage_key,
            created_at: Utc::now(),
        }
    }
}
