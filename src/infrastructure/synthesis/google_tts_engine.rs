use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{SpeechEngine, SynthesisError};

use super::minimal_silence;

/// The endpoint rejects queries above this length; longer text is split on
/// whitespace and the resulting MP3 segments concatenated.
const MAX_CHUNK_CHARS: usize = 200;

/// Network TTS with one default voice per language; the voice id is ignored
/// and the target language picks the voice.
pub struct GoogleTtsEngine {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GoogleTtsEngine {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn chunk_text(text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if word.len() > MAX_CHUNK_CHARS {
                // A single oversized token is split at char boundaries.
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                let mut piece = String::new();
                for ch in word.chars() {
                    if piece.len() + ch.len_utf8() > MAX_CHUNK_CHARS {
                        chunks.push(std::mem::take(&mut piece));
                    }
                    piece.push(ch);
                }
                if !piece.is_empty() {
                    chunks.push(piece);
                }
                continue;
            }

            if !current.is_empty() && current.len() + 1 + word.len() > MAX_CHUNK_CHARS {
                chunks.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    async fn fetch_chunk(&self, chunk: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}/translate_tts", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
            ])
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
            return Err(SynthesisError::Unavailable(format!("status {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Unavailable(format!("read body: {e}")))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechEngine for GoogleTtsEngine {
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), language))]
    async fn synthesize(
        &self,
        text: &str,
        _voice_id: &str,
        language: &str,
    ) -> Result<Vec<u8>, SynthesisError> {
        if text.trim().is_empty() {
            return Ok(minimal_silence());
        }

        let chunks = Self::chunk_text(text);
        let mut audio = Vec::new();
        for chunk in &chunks {
            audio.extend(self.fetch_chunk(chunk, language).await?);
        }

        tracing::debug!(chunks = chunks.len(), bytes = audio.len(), "Synthesis completed");
        Ok(audio)
    }
}
