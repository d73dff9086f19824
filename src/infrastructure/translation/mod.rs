mod google_translator;

pub use google_translator::GoogleTranslator;
