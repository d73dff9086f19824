use std::process::{Command, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use wait_timeout::ChildExt;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::ContentPayload;
use crate::infrastructure::process::{drain_pipe, join_pipe};

const OCR_TIMEOUT: Duration = Duration::from_secs(30);

/// Optical character recognition over raster images, via the tesseract CLI.
/// A payload that does not decode as an image is rejected; an image in which
/// OCR finds no text yields the empty string.
pub struct ImageOcrExtractor {
    binary: String,
    ocr_language: String,
}

impl ImageOcrExtractor {
    pub fn new(binary: impl Into<String>, ocr_language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            ocr_language: ocr_language.into(),
        }
    }

    fn run_ocr(binary: &str, ocr_language: &str, data: &[u8]) -> Result<String, ExtractionError> {
        let img = image::load_from_memory(data).map_err(|e| {
            ExtractionError::UnsupportedImage(format!("failed to decode image: {e}"))
        })?;

        let temp = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| ExtractionError::Failed(format!("failed to create temp file: {e}")))?;

        img.save(temp.path())
            .map_err(|e| ExtractionError::Failed(format!("failed to write temp image: {e}")))?;

        let mut child = Command::new(binary)
            .arg(temp.path())
            .arg("stdout")
            .args(["-l", ocr_language])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExtractionError::Failed(format!("failed to spawn {binary}: {e}")))?;

        // Drain both pipes while waiting so the child cannot block on a
        // full pipe and ride out the clock.
        let stdout = drain_pipe(child.stdout.take());
        let stderr = drain_pipe(child.stderr.take());

        match child
            .wait_timeout(OCR_TIMEOUT)
            .map_err(|e| ExtractionError::Failed(format!("ocr wait: {e}")))?
        {
            Some(status) => {
                let recognized = join_pipe(stdout);
                if status.success() {
                    Ok(String::from_utf8_lossy(&recognized).trim().to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&join_pipe(stderr)).into_owned();
                    Err(ExtractionError::Failed(format!("ocr error: {stderr}")))
                }
            }
            None => {
                let _ = child.kill();
                let _ = child.wait();
                join_pipe(stdout);
                join_pipe(stderr);
                Err(ExtractionError::Failed("ocr timed out".to_string()))
            }
        }
    }
}

#[async_trait]
impl TextExtractor for ImageOcrExtractor {
    #[tracing::instrument(skip(self, payload))]
    async fn extract(&self, payload: &ContentPayload) -> Result<String, ExtractionError> {
        let data = match payload {
            ContentPayload::Image(bytes) => bytes.clone(),
            other => {
                return Err(ExtractionError::UnsupportedContent(
                    other.kind().as_str().to_string(),
                ))
            }
        };

        let binary = self.binary.clone();
        let ocr_language = self.ocr_language.clone();
        // The child process is bounded by OCR_TIMEOUT inside the blocking
        // task and killed on expiry, so no outer timeout is needed here.
        let text =
            tokio::task::spawn_blocking(move || Self::run_ocr(&binary, &ocr_language, &data))
                .await
                .map_err(|e| ExtractionError::Failed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.len(), "Image OCR complete");
        Ok(text)
    }
}
