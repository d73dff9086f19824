use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::ContentPayload;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Paged PDF text extraction. Pages are read in page order and concatenated
/// with nothing added beyond what each page yields; a page that fails to
/// yield text contributes an empty string instead of aborting the document.
#[derive(Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<String, ExtractionError> {
        let doc = Document::load_mem(data)
            .map_err(|e| ExtractionError::CorruptDocument(format!("failed to parse PDF: {e}")))?;

        let pages = doc.get_pages();
        let page_count = pages.len();

        let mut text = String::new();
        for page_number in pages.keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::debug!(page = page_number, error = %e, "Page yielded no text");
                }
            }
        }

        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    #[tracing::instrument(skip(self, payload))]
    async fn extract(&self, payload: &ContentPayload) -> Result<String, ExtractionError> {
        let data = match payload {
            ContentPayload::Pdf(bytes) => bytes.clone(),
            other => {
                return Err(ExtractionError::UnsupportedContent(
                    other.kind().as_str().to_string(),
                ))
            }
        };

        tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data)),
        )
        .await
        .map_err(|_| ExtractionError::Failed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractionError::Failed(format!("task join error: {e}")))?
    }
}
