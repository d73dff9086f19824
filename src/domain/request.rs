use super::artifact::SourceKind;
use super::ids::OwnerId;

/// The content handed to the pipeline, tagged with its declared kind.
///
/// Text carries the extracted string directly; Pdf and Image carry raw bytes
/// that still need extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPayload {
    Text(String),
    Pdf(Vec<u8>),
    Image(Vec<u8>),
}

impl ContentPayload {
    pub fn kind(&self) -> SourceKind {
        match self {
            ContentPayload::Text(_) => SourceKind::Text,
            ContentPayload::Pdf(_) => SourceKind::Pdf,
            ContentPayload::Image(_) => SourceKind::Image,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestValidationError {
    #[error("empty {0} payload")]
    EmptyPayload(SourceKind),
}

/// One conversion request as received from the transport layer.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub owner_id: OwnerId,
    pub payload: ContentPayload,
    pub target_language: String,
    pub voice_selector: String,
}

impl ConversionRequest {
    pub fn new(owner_id: OwnerId, payload: ContentPayload) -> Self {
        Self {
            owner_id,
            payload,
            target_language: "en".to_string(),
            voice_selector: "male".to_string(),
        }
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = language.into();
        self
    }

    pub fn with_voice_selector(mut self, selector: impl Into<String>) -> Self {
        self.voice_selector = selector.into();
        self
    }

    /// Reject malformed requests before any I/O happens. An empty Text
    /// payload is legal (downstream stages tolerate empty text); empty
    /// document or image bytes can never be parsed and are rejected here.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        match &self.payload {
            ContentPayload::Text(_) => Ok(()),
            ContentPayload::Pdf(bytes) if bytes.is_empty() => {
                Err(RequestValidationError::EmptyPayload(SourceKind::Pdf))
            }
            ContentPayload::Image(bytes) if bytes.is_empty() => {
                Err(RequestValidationError::EmptyPayload(SourceKind::Image))
            }
            _ => Ok(()),
        }
    }

    /// Target language, trimmed and lower-cased, defaulting to "en".
    pub fn normalized_language(&self) -> String {
        let lang = self.target_language.trim().to_lowercase();
        if lang.is_empty() {
            "en".to_string()
        } else {
            lang
        }
    }
}
