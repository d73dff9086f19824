use serde::Deserialize;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
    pub translation: TranslationSettings,
    pub synthesis: SynthesisSettings,
    pub ocr: OcrSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            storage: StorageSettings::from_env(),
            database: DatabaseSettings::from_env(),
            translation: TranslationSettings::from_env(),
            synthesis: SynthesisSettings::from_env(),
            ocr: OcrSettings::from_env(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub audio_dir: String,
}

impl StorageSettings {
    fn from_env() -> Self {
        Self {
            audio_dir: env_or("AUDIO_DIR", "static/audio"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
}

impl DatabaseSettings {
    fn from_env() -> Self {
        Self {
            url: env_or("DATABASE_URL", "sqlite://app.db"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl TranslationSettings {
    fn from_env() -> Self {
        Self {
            base_url: env_or("TRANSLATE_BASE_URL", "https://translate.googleapis.com"),
            timeout_secs: env_parse_or("TRANSLATE_TIMEOUT_SECS", 30),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub google_tts_base_url: String,
    pub stream_elements_base_url: String,
    pub espeak_binary: String,
    /// Upper bound on concurrent local synthesis calls; local engines are
    /// not safe for unbounded concurrent use.
    pub local_concurrency: usize,
    pub timeout_secs: u64,
}

impl SynthesisSettings {
    fn from_env() -> Self {
        Self {
            google_tts_base_url: env_or("GOOGLE_TTS_BASE_URL", "https://translate.google.com"),
            stream_elements_base_url: env_or(
                "STREAM_ELEMENTS_BASE_URL",
                "https://api.streamelements.com",
            ),
            espeak_binary: env_or("ESPEAK_BINARY", "espeak-ng"),
            local_concurrency: env_parse_or("LOCAL_SYNTHESIS_CONCURRENCY", 2),
            timeout_secs: env_parse_or("SYNTHESIS_TIMEOUT_SECS", 30),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub binary: String,
    pub language: String,
}

impl OcrSettings {
    fn from_env() -> Self {
        Self {
            binary: env_or("TESSERACT_BINARY", "tesseract"),
            language: env_or("OCR_LANGUAGE", "eng"),
        }
    }
}
