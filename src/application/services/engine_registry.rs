use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::SpeechEngine;
use crate::domain::EngineKind;

/// Strategy table over the available synthesis engines, keyed by engine kind.
/// The engine for a request is chosen once, at voice-resolution time.
pub struct EngineRegistry {
    engines: HashMap<EngineKind, Arc<dyn SpeechEngine>>,
}

impl EngineRegistry {
    pub fn new(engines: Vec<(EngineKind, Arc<dyn SpeechEngine>)>) -> Self {
        Self {
            engines: engines.into_iter().collect(),
        }
    }

    pub fn engine_for(&self, kind: EngineKind) -> Option<Arc<dyn SpeechEngine>> {
        self.engines.get(&kind).cloned()
    }
}
