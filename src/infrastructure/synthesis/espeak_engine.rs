use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use wait_timeout::ChildExt;

use crate::application::ports::{SpeechEngine, SynthesisError};
use crate::infrastructure::process::{drain_pipe, join_pipe};

use super::minimal_silence;

const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Local synthesis through an espeak-ng child process. One process per call,
/// never a shared engine instance, so concurrent requests cannot corrupt each
/// other's voice configuration. Calls run on the blocking pool behind a
/// bounded semaphore because local engines are not safe for unbounded
/// concurrent use; the child is killed on timeout so the engine handle is
/// released on every exit path.
pub struct EspeakEngine {
    binary: String,
    permits: Arc<Semaphore>,
}

impl EspeakEngine {
    pub fn new(binary: impl Into<String>, max_concurrency: usize) -> Self {
        Self {
            binary: binary.into(),
            permits: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }

    /// Scan the locally installed voices for one in the requested language
    /// whose gender column or name carries the requested marker. Local voice
    /// availability is host-dependent; no match means the engine's own
    /// default voice, never a failure.
    fn find_voice(binary: &str, language: &str, gender_marker: &str) -> Option<String> {
        let output = Command::new(binary).arg("--voices").output().ok()?;
        if !output.status.success() {
            return None;
        }

        let marker_char = match gender_marker {
            "female" => 'F',
            _ => 'M',
        };

        let listing = String::from_utf8_lossy(&output.stdout);
        let mut fallback = None;
        // Columns: Pty Language Age/Gender VoiceName File Other
        for line in listing.lines().skip(1) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                continue;
            }
            let (lang, age_gender, name) = (fields[1], fields[2], fields[3]);
            let gender_matches =
                age_gender.contains(marker_char) || name.to_lowercase().contains(gender_marker);
            if !gender_matches {
                continue;
            }
            if lang.starts_with(language) {
                return Some(name.to_string());
            }
            if fallback.is_none() {
                fallback = Some(name.to_string());
            }
        }
        fallback
    }

    fn run_synthesis(
        binary: &str,
        text: &str,
        voice: Option<&str>,
    ) -> Result<Vec<u8>, SynthesisError> {
        let mut cmd = Command::new(binary);
        cmd.arg("--stdout").arg("--stdin");
        if let Some(voice) = voice {
            cmd.args(["-v", voice]);
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SynthesisError::Unavailable(format!("failed to spawn {binary}: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(SynthesisError::Unavailable(format!("write stdin: {e}")));
            }
        }

        // Drain both pipes while waiting; audio output alone exceeds a pipe
        // buffer after a fraction of a second of speech.
        let stdout = drain_pipe(child.stdout.take());
        let stderr = drain_pipe(child.stderr.take());

        match child
            .wait_timeout(SYNTHESIS_TIMEOUT)
            .map_err(|e| SynthesisError::Unavailable(format!("wait: {e}")))?
        {
            Some(status) => {
                let audio = join_pipe(stdout);
                if status.success() {
                    Ok(audio)
                } else {
                    let stderr = String::from_utf8_lossy(&join_pipe(stderr)).into_owned();
                    Err(SynthesisError::Unavailable(format!(
                        "{binary} error: {stderr}"
                    )))
                }
            }
            None => {
                let _ = child.kill();
                let _ = child.wait();
                join_pipe(stdout);
                join_pipe(stderr);
                Err(SynthesisError::Timeout(SYNTHESIS_TIMEOUT.as_secs()))
            }
        }
    }
}

#[async_trait]
impl SpeechEngine for EspeakEngine {
    #[tracing::instrument(skip(self, text), fields(chars = text.len(), voice_id))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        language: &str,
    ) -> Result<Vec<u8>, SynthesisError> {
        if text.trim().is_empty() {
            return Ok(minimal_silence());
        }

        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| SynthesisError::Unavailable("engine pool closed".to_string()))?;

        let binary = self.binary.clone();
        let text = text.to_string();
        let gender_marker = voice_id.to_string();
        let language = language.to_string();

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let voice = Self::find_voice(&binary, &language, &gender_marker);
            tracing::debug!(voice = voice.as_deref().unwrap_or("<engine default>"), "Local voice selected");
            Self::run_synthesis(&binary, &text, voice.as_deref())
        })
        .await
        .map_err(|e| SynthesisError::Unavailable(format!("task join error: {e}")))?
    }
}
