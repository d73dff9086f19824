mod composite_extractor;
mod image_ocr_extractor;
mod pdf_extractor;
mod plain_text_extractor;

pub use composite_extractor::CompositeExtractor;
pub use image_ocr_extractor::ImageOcrExtractor;
pub use pdf_extractor::PdfExtractor;
pub use plain_text_extractor::PlainTextExtractor;
