mod conversion_service;
mod engine_registry;
mod library_service;
mod voice_catalog;

pub use conversion_service::{ConversionError, ConversionService};
pub use engine_registry::EngineRegistry;
pub use library_service::{LibraryError, LibraryService};
pub use voice_catalog::VoiceCatalog;
