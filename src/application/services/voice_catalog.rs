use std::collections::HashMap;

use crate::domain::{EngineKind, VoiceProfile};

const DEFAULT_SELECTOR: &str = "male";

/// Fixed selector table. The gendered defaults go through the network engine
/// with its per-language default voice; locale entries map to the rich-catalog
/// engine's named voices; offline entries use the local engine.
const VOICE_TABLE: &[VoiceProfile] = &[
    VoiceProfile::new("male", EngineKind::GoogleTts, "default"),
    VoiceProfile::new("female", EngineKind::GoogleTts, "default"),
    VoiceProfile::new("uk_male", EngineKind::StreamElements, "Brian"),
    VoiceProfile::new("uk_female", EngineKind::StreamElements, "Amy"),
    VoiceProfile::new("indian_female", EngineKind::StreamElements, "Raveena"),
    VoiceProfile::new("spanish_male", EngineKind::StreamElements, "Enrique"),
    VoiceProfile::new("spanish_female", EngineKind::StreamElements, "Conchita"),
    VoiceProfile::new("german_male", EngineKind::StreamElements, "Hans"),
    VoiceProfile::new("german_female", EngineKind::StreamElements, "Marlene"),
    VoiceProfile::new("french_male", EngineKind::StreamElements, "Mathieu"),
    VoiceProfile::new("french_female", EngineKind::StreamElements, "Celine"),
    VoiceProfile::new("offline_male", EngineKind::Espeak, "male"),
    VoiceProfile::new("offline_female", EngineKind::Espeak, "female"),
];

/// Maps user-facing voice selectors to concrete engine voices.
pub struct VoiceCatalog {
    table: HashMap<&'static str, VoiceProfile>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self {
            table: VOICE_TABLE
                .iter()
                .map(|p| (p.selector, p.clone()))
                .collect(),
        }
    }

    /// Total lookup: any selector resolves to a profile. Matching is exact
    /// after trimming and lower-casing; anything unrecognized degrades to the
    /// default profile instead of blocking the conversion.
    pub fn resolve(&self, selector: &str) -> VoiceProfile {
        let normalized = selector.trim().to_lowercase();
        match self.table.get(normalized.as_str()) {
            Some(profile) => profile.clone(),
            None => {
                if !normalized.is_empty() {
                    tracing::debug!(selector = %normalized, "Unknown voice selector, using default");
                }
                self.table[DEFAULT_SELECTOR].clone()
            }
        }
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
