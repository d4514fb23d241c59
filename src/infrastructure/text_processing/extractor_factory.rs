use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::ContentType;
use crate::presentation::config::ExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Registers one adapter per enabled format. Disabled formats surface as
    /// unsupported uploads.
    pub fn create(settings: &ExtractionSettings) -> Arc<CompositeFileLoader> {
        let mut adapters: Vec<(ContentType, Arc<dyn FileLoader>)> = Vec::new();

        if settings.pdf_enabled {
            adapters.push((ContentType::Pdf, Arc::new(PdfAdapter::new())));
        }
        if settings.docx_enabled {
            adapters.push((ContentType::Docx, Arc::new(DocxAdapter::new())));
        }
        if settings.text_enabled {
            adapters.push((ContentType::Text, Arc::new(PlainTextAdapter)));
        }

        let enabled: Vec<&str> = adapters.iter().map(|(ct, _)| ct.extension()).collect();
        tracing::info!(formats = ?enabled, "File extractors registered");

        Arc::new(CompositeFileLoader::new(adapters))
    }
}
