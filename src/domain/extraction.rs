use serde_json::{Map, Value};

/// Opaque key-value metadata reported by an extraction backend.
pub type Metadata = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractionResult {
    pub text: String,
    pub metadata: Option<Metadata>,
}

impl ExtractionResult {
    pub fn text_only(text: String) -> Self {
        Self {
            text,
            metadata: None,
        }
    }

    pub fn with_metadata(text: String, metadata: Metadata) -> Self {
        Self {
            text,
            metadata: Some(metadata),
        }
    }
}
