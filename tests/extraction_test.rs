use std::sync::Arc;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use semporna::application::ports::{ExtractionError, TextExtractor};
use semporna::domain::{ContentPayload, SourceKind};
use semporna::infrastructure::extraction::{
    CompositeExtractor, ImageOcrExtractor, PdfExtractor, PlainTextExtractor,
};

/// Builds a PDF with one page per entry; an empty entry becomes a page with
/// no content operations.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_pages_concatenate_in_order() {
    let pdf = build_pdf(&["Page one", "", "Page three"]);

    let text = PdfExtractor::new()
        .extract(&ContentPayload::Pdf(pdf))
        .await
        .unwrap();

    assert!(text.contains("Page one"));
    assert!(text.contains("Page three"));
    assert!(!text.contains("two"));

    let first = text.find("Page one").unwrap();
    let third = text.find("Page three").unwrap();
    assert!(first < third);
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_pdf_then_corrupt_document() {
    let result = PdfExtractor::new()
        .extract(&ContentPayload::Pdf(b"definitely not a pdf".to_vec()))
        .await;

    assert!(matches!(result, Err(ExtractionError::CorruptDocument(_))));
}

#[tokio::test]
async fn given_text_payload_when_extracting_pdf_then_unsupported_content() {
    let result = PdfExtractor::new()
        .extract(&ContentPayload::Text("hello".to_string()))
        .await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedContent(_))));
}

#[tokio::test]
async fn given_text_payload_when_extracting_plain_text_then_it_passes_through() {
    let extractor = PlainTextExtractor;

    let text = extractor
        .extract(&ContentPayload::Text("already text".to_string()))
        .await
        .unwrap();
    assert_eq!(text, "already text");

    let empty = extractor
        .extract(&ContentPayload::Text(String::new()))
        .await
        .unwrap();
    assert_eq!(empty, "");
}

#[tokio::test]
async fn given_pdf_payload_when_extracting_plain_text_then_unsupported_content() {
    let result = PlainTextExtractor
        .extract(&ContentPayload::Pdf(vec![1, 2, 3]))
        .await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedContent(_))));
}

#[tokio::test]
async fn given_undecodable_image_bytes_then_unsupported_image() {
    let extractor = ImageOcrExtractor::new("tesseract", "eng");

    let result = extractor
        .extract(&ContentPayload::Image(b"not an image".to_vec()))
        .await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedImage(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn given_ocr_output_larger_than_a_pipe_buffer_then_it_is_returned_whole() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let script = dir.path().join("fake-ocr");
    std::fs::write(
        &script,
        "#!/bin/sh\ndd if=/dev/zero bs=1024 count=200 2>/dev/null | tr '\\0' 'x'\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();

    let mut png = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4))
        .write_to(&mut png, image::ImageFormat::Png)
        .unwrap();

    let extractor = ImageOcrExtractor::new(script.to_string_lossy().into_owned(), "eng");
    let text = extractor
        .extract(&ContentPayload::Image(png.into_inner()))
        .await
        .unwrap();

    assert_eq!(text.len(), 200 * 1024);
}

#[tokio::test]
async fn given_composite_when_extracting_then_payload_routes_by_kind() {
    let composite = CompositeExtractor::new(vec![
        (SourceKind::Text, Arc::new(PlainTextExtractor) as _),
        (SourceKind::Pdf, Arc::new(PdfExtractor::new()) as _),
    ]);

    let text = composite
        .extract(&ContentPayload::Text("routed".to_string()))
        .await
        .unwrap();
    assert_eq!(text, "routed");

    let pdf_text = composite
        .extract(&ContentPayload::Pdf(build_pdf(&["From a pdf"])))
        .await
        .unwrap();
    assert!(pdf_text.contains("From a pdf"));
}

#[tokio::test]
async fn given_composite_without_image_extractor_then_unsupported_content() {
    let composite =
        CompositeExtractor::new(vec![(SourceKind::Text, Arc::new(PlainTextExtractor) as _)]);

    let result = composite
        .extract(&ContentPayload::Image(vec![0xFF, 0xD8]))
        .await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedContent(_))));
}
