use async_trait::async_trait;

/// External translation service. Source language is always auto-detected;
/// the caller decides retry policy, none is assumed here.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),
    #[error("invalid translation response: {0}")]
    InvalidResponse(String),
}
