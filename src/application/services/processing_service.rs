use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, Summarizer, SummarizerError};
use crate::domain::{
    ContentType, DEFAULT_LANGUAGE, DEFAULT_MAX_WORDS, Document, Metadata, SummarizeOptions,
};
use crate::infrastructure::observability::preview_for_log;
use crate::infrastructure::text_processing::normalize_text;

const EMPTY_UPLOAD_MESSAGE: &str = "Uploaded file contained no extractable text";
const MISSING_INPUT_MESSAGE: &str = "Provide a PDF/DOCX/TXT file or non-empty text field";

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub mime: Option<String>,
    pub data: Vec<u8>,
}

/// The shapes of input the process endpoint accepts, already separated from
/// the HTTP transport.
#[derive(Debug, Clone)]
pub enum ProcessRequest {
    Form {
        file: Option<Upload>,
        text: Option<String>,
    },
    Json {
        text: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    pub language: String,
    pub summary: String,
    pub prompt: String,
    pub meta: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq)]
struct PreparedText {
    text: String,
    meta: Option<Metadata>,
}

pub struct ProcessingService<F, S>
where
    F: FileLoader + ?Sized,
    S: Summarizer + ?Sized,
{
    file_loader: Arc<F>,
    summarizer: Arc<S>,
    max_upload_bytes: usize,
}

impl<F, S> ProcessingService<F, S>
where
    F: FileLoader + ?Sized,
    S: Summarizer + ?Sized,
{
    pub fn new(file_loader: Arc<F>, summarizer: Arc<S>, max_upload_bytes: usize) -> Self {
        Self {
            file_loader,
            summarizer,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Obtains normalized text from the request, summarizes it and assembles
    /// the response. Every failure aborts before the next step runs.
    pub async fn process(&self, request: ProcessRequest) -> Result<ProcessOutcome, ProcessError> {
        let prepared = match request {
            ProcessRequest::Form {
                file: Some(upload), ..
            } => self.text_from_upload(upload).await?,
            ProcessRequest::Form { file: None, text } => Self::text_from_form_field(text)?,
            ProcessRequest::Json { text } => Self::text_from_json(text)?,
        };

        tracing::debug!(
            chars = prepared.text.len(),
            preview = %preview_for_log(&prepared.text),
            "Text ready for summarization"
        );

        let options = SummarizeOptions::new(DEFAULT_MAX_WORDS, Some(DEFAULT_LANGUAGE.to_string()));
        let result = self
            .summarizer
            .summarize(&prepared.text, &options)
            .await
            .map_err(ProcessError::from)?;

        let prompt = build_video_prompt(&result.summary);

        Ok(ProcessOutcome {
            language: result.language,
            summary: result.summary,
            prompt,
            meta: prepared.meta,
        })
    }

    async fn text_from_upload(&self, upload: Upload) -> Result<PreparedText, ProcessError> {
        let content_type = ContentType::resolve(upload.mime.as_deref(), &upload.filename)
            .ok_or(ProcessError::UnsupportedFormat)?;

        if upload.data.len() > self.max_upload_bytes {
            return Err(ProcessError::FileTooLarge {
                size: upload.data.len(),
                limit: self.max_upload_bytes,
            });
        }

        let document = Document::new(upload.filename, content_type, upload.data.len() as u64);

        tracing::debug!(
            filename = %document.filename,
            content_type = document.content_type.as_mime(),
            bytes = document.size_bytes,
            "Extracting uploaded file"
        );

        let extraction = self
            .file_loader
            .extract(&upload.data, &document)
            .await
            .map_err(ProcessError::from)?;

        let text = normalize_text(&extraction.text);
        if text.is_empty() {
            return Err(ProcessError::NoContent(EMPTY_UPLOAD_MESSAGE.to_string()));
        }

        Ok(PreparedText {
            text,
            meta: extraction.metadata,
        })
    }

    fn text_from_form_field(text: Option<String>) -> Result<PreparedText, ProcessError> {
        let text = text
            .filter(|t| !t.trim().is_empty())
            .map(|t| normalize_text(&t))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProcessError::NoContent(MISSING_INPUT_MESSAGE.to_string()))?;

        Ok(PreparedText { text, meta: None })
    }

    fn text_from_json(text: Option<String>) -> Result<PreparedText, ProcessError> {
        let text = normalize_text(text.as_deref().unwrap_or_default());
        if text.is_empty() {
            return Err(ProcessError::EmptyBody);
        }

        Ok(PreparedText { text, meta: None })
    }
}

/// Interpolates a summary into the narration prompt handed to video generation.
pub fn build_video_prompt(summary: &str) -> String {
    format!("Generate a 30-second multilingual video with captions and narration about: {summary}")
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Unsupported file type. Please upload a PDF, DOCX, or TXT file.")]
    UnsupportedFormat,
    #[error("{0}")]
    NoContent(String),
    #[error("Empty text body")]
    EmptyBody,
    #[error("Unsupported content type. Use multipart/form-data or application/json")]
    UnsupportedContentType,
    #[error("Uploaded file is {size} bytes, above the {limit} byte limit")]
    FileTooLarge { size: usize, limit: usize },
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("{0}")]
    MissingCredential(SummarizerError),
    #[error("{0}")]
    UpstreamFailure(String),
}

impl From<FileLoaderError> for ProcessError {
    fn from(error: FileLoaderError) -> Self {
        match error {
            FileLoaderError::UnsupportedContentType(_) => Self::UnsupportedFormat,
            FileLoaderError::NoTextFound(_) => Self::NoContent(EMPTY_UPLOAD_MESSAGE.to_string()),
            FileLoaderError::ExtractionFailed(_) => Self::UpstreamFailure(error.to_string()),
        }
    }
}

impl From<SummarizerError> for ProcessError {
    fn from(error: SummarizerError) -> Self {
        match error {
            SummarizerError::MissingCredential => Self::MissingCredential(error),
            other => Self::UpstreamFailure(other.to_string()),
        }
    }
}
