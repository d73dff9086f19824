/// A synthesis backend. Network engines differ from the local engine in
/// execution model, not in contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Network TTS with one default voice per language.
    GoogleTts,
    /// Network TTS with a catalog of named voices.
    StreamElements,
    /// Local in-process synthesis via an espeak-ng instance.
    Espeak,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::GoogleTts => "google_tts",
            EngineKind::StreamElements => "stream_elements",
            EngineKind::Espeak => "espeak",
        }
    }
}

/// A resolved voice: which engine to use and the engine-specific voice id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    pub selector: &'static str,
    pub engine: EngineKind,
    pub voice_id: &'static str,
}

impl VoiceProfile {
    pub const fn new(selector: &'static str, engine: EngineKind, voice_id: &'static str) -> Self {
        Self {
            selector,
            engine,
            voice_id,
        }
    }
}
