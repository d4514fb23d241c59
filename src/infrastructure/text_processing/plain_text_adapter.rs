use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractionResult};

const BYTE_ORDER_MARK: char = '\u{feff}';

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractionResult, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        // Invalid sequences decode to U+FFFD instead of failing the upload.
        let decoded = String::from_utf8_lossy(data);
        let text = decoded
            .strip_prefix(BYTE_ORDER_MARK)
            .unwrap_or(&decoded)
            .to_string();

        Ok(ExtractionResult::text_only(text))
    }
}
