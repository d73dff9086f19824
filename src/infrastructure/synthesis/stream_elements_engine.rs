use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{SpeechEngine, SynthesisError};

use super::minimal_silence;

/// Network TTS with a catalog of named voices (Brian, Amy, Raveena, ...).
/// The request carries the engine voice id; language is implied by the voice.
pub struct StreamElementsEngine {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl StreamElementsEngine {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl SpeechEngine for StreamElementsEngine {
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), voice_id))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        _language: &str,
    ) -> Result<Vec<u8>, SynthesisError> {
        if text.trim().is_empty() {
            return Ok(minimal_silence());
        }

        let url = format!("{}/kappa/v2/speech", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("voice", voice_id), ("text", text)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout(self.timeout.as_secs())
                } else {
                    SynthesisError::Unavailable(format!("request: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::Unavailable(format!(
                "status {status}: {body}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Unavailable(format!("read body: {e}")))?;

        tracing::debug!(bytes = bytes.len(), "Synthesis completed");
        Ok(bytes.to_vec())
    }
}
