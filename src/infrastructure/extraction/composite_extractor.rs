use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{ContentPayload, SourceKind};

/// Dispatches each payload to the extractor registered for its kind.
pub struct CompositeExtractor {
    extractors: HashMap<SourceKind, Arc<dyn TextExtractor>>,
}

impl CompositeExtractor {
    pub fn new(extractors: Vec<(SourceKind, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract(&self, payload: &ContentPayload) -> Result<String, ExtractionError> {
        let extractor = self.extractors.get(&payload.kind()).ok_or_else(|| {
            ExtractionError::UnsupportedContent(payload.kind().as_str().to_string())
        })?;

        extractor.extract(payload).await
    }
}
