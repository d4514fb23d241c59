mod document;
mod extraction;
mod summary;

pub use document::{ContentType, Document};
pub use extraction::{ExtractionResult, Metadata};
pub use summary::{DEFAULT_LANGUAGE, DEFAULT_MAX_WORDS, SummarizeOptions, SummarizeResult};
