use reelbrief::application::ports::{FileLoader, FileLoaderError};
use reelbrief::domain::{ContentType, Document};
use reelbrief::infrastructure::text_processing::PdfAdapter;

use crate::helpers::{build_pdf, build_pdf_with_info};

fn pdf_document(size: usize) -> Document {
    Document::new("release.pdf".to_string(), ContentType::Pdf, size as u64)
}

#[tokio::test]
async fn given_pdf_with_info_dictionary_when_extracting_then_returns_text_and_metadata() {
    let data = build_pdf_with_info("Press Note", "PIB Delhi", "Ministry announces new scheme");

    let result = PdfAdapter::new()
        .extract(&data, &pdf_document(data.len()))
        .await
        .unwrap();

    assert!(result.text.contains("Ministry"));
    let metadata = result.metadata.unwrap();
    assert_eq!(metadata["pages"], 1);
    assert_eq!(metadata["pages_with_text"], 1);
    assert_eq!(metadata["title"], "Press Note");
    assert_eq!(metadata["author"], "PIB Delhi");
}

#[tokio::test]
async fn given_non_latin_title_when_extracting_then_decodes_utf16_text_string() {
    let data = build_pdf_with_info("प्रेस विज्ञप्ति", "पत्र सूचना कार्यालय", "Body text");

    let result = PdfAdapter::new()
        .extract(&data, &pdf_document(data.len()))
        .await
        .unwrap();

    let metadata = result.metadata.unwrap();
    assert_eq!(metadata["title"], "प्रेस विज्ञप्ति");
    assert_eq!(metadata["author"], "पत्र सूचना कार्यालय");
}

#[tokio::test]
async fn given_pdf_without_info_entries_when_extracting_then_reports_only_page_counts() {
    let data = build_pdf("Plain body");

    let result = PdfAdapter::new()
        .extract(&data, &pdf_document(data.len()))
        .await
        .unwrap();

    let metadata = result.metadata.unwrap();
    assert!(metadata.get("title").is_none());
    assert!(metadata.get("author").is_none());
    assert_eq!(metadata["pages"], 1);
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_joins_pages_with_blank_lines() {
    let body: String = (1..=150).map(|i| format!("Line {i}\n")).collect();
    let data = build_pdf(&body);

    let result = PdfAdapter::new()
        .extract(&data, &pdf_document(data.len()))
        .await
        .unwrap();

    let metadata = result.metadata.unwrap();
    let pages = metadata["pages"].as_u64().unwrap();
    assert!(pages >= 2, "expected several pages, got {pages}");
    assert_eq!(metadata["pages_with_text"].as_u64(), Some(pages));
    assert!(result.text.contains("\n\n"));
    assert!(result.text.contains("Line 1"));
    assert!(result.text.contains("Line 150"));
}

#[tokio::test]
async fn given_pdf_without_text_layer_when_extracting_then_returns_no_text_found() {
    let data = build_pdf("");

    let result = PdfAdapter::new()
        .extract(&data, &pdf_document(data.len()))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::NoTextFound(name)) if name == "release.pdf"
    ));
}

#[tokio::test]
async fn given_corrupt_pdf_bytes_when_extracting_then_returns_extraction_failed() {
    let data = b"this is not a pdf at all";
    let document = Document::new("broken.pdf".to_string(), ContentType::Pdf, data.len() as u64);

    let result = PdfAdapter::new().extract(data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_document_when_extracting_then_returns_unsupported_content_type() {
    let document = Document::new("release.docx".to_string(), ContentType::Docx, 4);

    let result = PdfAdapter::new().extract(b"PK..", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
