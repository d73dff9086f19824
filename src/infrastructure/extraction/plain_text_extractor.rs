use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::ContentPayload;

/// Text payloads are already text; extraction is the identity transform.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, payload: &ContentPayload) -> Result<String, ExtractionError> {
        match payload {
            ContentPayload::Text(text) => Ok(text.clone()),
            other => Err(ExtractionError::UnsupportedContent(
                other.kind().as_str().to_string(),
            )),
        }
    }
}
