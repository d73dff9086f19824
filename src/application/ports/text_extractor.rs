use async_trait::async_trait;

use crate::domain::ContentPayload;

/// Turns a content payload into plain text. Pure transform over in-memory
/// input; extraction may legitimately yield an empty string (blank page,
/// image with no recognizable text) and downstream stages must tolerate it.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, payload: &ContentPayload) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("corrupt document: {0}")]
    CorruptDocument(String),
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),
    #[error("unsupported content kind: {0}")]
    UnsupportedContent(String),
    #[error("extraction failed: {0}")]
    Failed(String),
}
