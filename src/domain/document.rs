use std::path::Path;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const TEXT_MIME: &str = "text/plain";

/// MIME types browsers and HTTP clients send when they do not know better.
const GENERIC_MIMES: [&str; 2] = ["application/octet-stream", "binary/octet-stream"];

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Docx,
    Text,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [Self::Pdf, Self::Docx, Self::Text];

    /// Matches the essence of a MIME type, ignoring parameters and case.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_mime().eq_ignore_ascii_case(essence))
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|ct| ct.extension() == extension)
    }

    /// Resolves the declared MIME type first and falls back to the filename
    /// extension when the MIME type is absent, generic or unrecognized.
    pub fn resolve(mime: Option<&str>, filename: &str) -> Option<Self> {
        mime.filter(|m| !is_generic_mime(m))
            .and_then(Self::from_mime)
            .or_else(|| Self::from_filename(filename))
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
            Self::Text => TEXT_MIME,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "txt",
        }
    }
}

fn is_generic_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    essence.is_empty()
        || GENERIC_MIMES
            .iter()
            .any(|generic| generic.eq_ignore_ascii_case(essence))
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }
}
