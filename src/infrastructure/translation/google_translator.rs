use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{TranslationError, Translator};

/// Client for the Google translation endpoint the original service used,
/// source language always auto-detected. The base URL is injectable so tests
/// can point it at a local server.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GoogleTranslator {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), target = target_language))]
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TranslationError::Unavailable(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::Unavailable(format!(
                "status {status}: {body}"
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("parse response: {e}")))?;

        // Response shape: [[["segment", "original", ...], ...], ...]. The
        // translation is the concatenation of the first element of each
        // segment array.
        let segments = value
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TranslationError::InvalidResponse("missing segment array".into()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|p| p.as_str()) {
                translated.push_str(part);
            }
        }

        tracing::debug!(chars = translated.len(), "Translation completed");
        Ok(translated)
    }
}
