use async_trait::async_trait;

/// Renders text into audio bytes. One implementation per engine kind; the
/// pipeline depends only on this trait, never on which variant it holds.
///
/// Implementations must accept empty text and yield a minimal valid audio
/// buffer rather than erroring, because upstream extraction may legitimately
/// produce nothing.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        language: &str,
    ) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis service unavailable: {0}")]
    Unavailable(String),
    #[error("synthesis timed out after {0}s")]
    Timeout(u64),
}
