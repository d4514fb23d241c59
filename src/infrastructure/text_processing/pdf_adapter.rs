use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use pdf_oxide::object::Object;
use serde_json::Value;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractionResult, Metadata};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Info dictionary entries copied into the extraction metadata.
const INFO_FIELDS: [(&str, &str); 8] = [
    ("Title", "title"),
    ("Author", "author"),
    ("Subject", "subject"),
    ("Keywords", "keywords"),
    ("Creator", "creator"),
    ("Producer", "producer"),
    ("CreationDate", "creation_date"),
    ("ModDate", "modification_date"),
];

#[derive(Default)]
pub struct PdfAdapter;

struct ExtractedPdf {
    page_count: usize,
    pages: Vec<String>,
    info: Metadata,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<ExtractedPdf, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(page_index, error = %e, "Skipping unreadable PDF page");
                }
            }
        }

        let info = Self::read_info(&doc);

        Ok(ExtractedPdf {
            page_count,
            pages,
            info,
        })
    }

    /// Reads the document Info dictionary. A missing or unreadable dictionary
    /// yields no entries rather than failing the extraction.
    fn read_info(doc: &PdfDocument) -> Metadata {
        let mut info = Metadata::new();

        let Some(entry) = doc.trailer().as_dict().and_then(|d| d.get("Info")) else {
            return info;
        };

        let dictionary = match entry.as_reference() {
            Some(reference) => match doc.load_object(reference) {
                Ok(object) => object,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable PDF Info dictionary");
                    return info;
                }
            },
            None => entry.clone(),
        };

        let Some(fields) = dictionary.as_dict() else {
            return info;
        };

        for (pdf_key, meta_key) in INFO_FIELDS {
            let value = match fields.get(pdf_key) {
                Some(Object::Reference(reference)) => doc.load_object(*reference).ok(),
                Some(other) => Some(other.clone()),
                None => None,
            };

            if let Some(text) = value
                .as_ref()
                .and_then(Object::as_string)
                .map(decode_text_string)
                .filter(|t| !t.trim().is_empty())
            {
                info.insert(meta_key.to_string(), Value::from(text));
            }
        }

        info
    }
}

/// Decodes a PDF text string: UTF-16BE when it carries a byte order mark,
/// UTF-8 when it carries the UTF-8 mark, PDFDocEncoding otherwise.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }

    bytes.iter().map(|&b| char::from(b)).collect()
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, size_bytes = document.size_bytes)
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractionResult, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let extracted = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = extracted.page_count,
            pages_with_text = extracted.pages.len(),
            "PDF text extraction complete"
        );

        if extracted.pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        let mut metadata = extracted.info;
        metadata.insert("pages".to_string(), Value::from(extracted.page_count));
        metadata.insert(
            "pages_with_text".to_string(),
            Value::from(extracted.pages.len()),
        );

        Ok(ExtractionResult::with_metadata(
            extracted.pages.join("\n\n"),
            metadata,
        ))
    }
}
