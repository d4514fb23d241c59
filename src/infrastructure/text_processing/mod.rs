mod composite_file_loader;
mod docx_adapter;
mod extractor_factory;
mod pdf_adapter;
mod plain_text_adapter;
mod text_normalizer;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::{DocxAdapter, document_xml_to_text};
pub use extractor_factory::ExtractorFactory;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_normalizer::normalize_text;
