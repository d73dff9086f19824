mod settings;

pub use settings::{
    DatabaseSettings, OcrSettings, Settings, StorageSettings, SynthesisSettings,
    TranslationSettings,
};
