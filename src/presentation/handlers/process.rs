use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, Summarizer};
use crate::application::services::{ProcessError, ProcessOutcome, ProcessRequest, Upload};
use crate::domain::Metadata;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";
const TEXT_FIELD: &str = "text";

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub language: String,
    pub summary: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
struct TextBody {
    text: Option<String>,
}

impl From<ProcessOutcome> for ProcessResponse {
    fn from(outcome: ProcessOutcome) -> Self {
        Self {
            language: outcome.language,
            summary: outcome.summary,
            prompt: outcome.prompt,
            meta: outcome.meta,
        }
    }
}

/// Every failure, validation or upstream, is reported as 400 with its message.
impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[tracing::instrument(skip_all, fields(content_type = tracing::field::Empty))]
pub async fn process_handler<F, S>(
    State(state): State<AppState<F, S>>,
    request: Request,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    tracing::Span::current().record("content_type", content_type.as_str());

    let outcome = match read_process_request(&content_type, request).await {
        Ok(process_request) => state.processing_service.process(process_request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(outcome) => {
            tracing::info!(
                language = %outcome.language,
                summary_chars = outcome.summary.len(),
                has_meta = outcome.meta.is_some(),
                "Process request completed"
            );
            (StatusCode::OK, Json(ProcessResponse::from(outcome))).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Process request failed");
            e.into_response()
        }
    }
}

async fn read_process_request(
    content_type: &str,
    request: Request,
) -> Result<ProcessRequest, ProcessError> {
    if content_type.contains("multipart/form-data") {
        read_form(request).await
    } else if content_type.contains("application/json") {
        read_json(request).await
    } else {
        Err(ProcessError::UnsupportedContentType)
    }
}

async fn read_form(request: Request) -> Result<ProcessRequest, ProcessError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| ProcessError::MalformedRequest(e.body_text()))?;

    let mut file = None;
    let mut text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProcessError::MalformedRequest(e.body_text()))?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            // Repeated parts resolve to the first occurrence.
            Some(FILE_FIELD) if file.is_none() => {
                // A plain string under `file` is not an upload.
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let mime = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ProcessError::MalformedRequest(e.body_text()))?;

                // Browsers send an empty, unnamed part when no file was chosen.
                if filename.is_empty() && data.is_empty() {
                    continue;
                }

                tracing::debug!(
                    filename = %filename,
                    mime = ?mime,
                    bytes = data.len(),
                    "File part received"
                );
                file = Some(Upload {
                    filename,
                    mime,
                    data: data.to_vec(),
                });
            }
            Some(TEXT_FIELD) if text.is_none() => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ProcessError::MalformedRequest(e.body_text()))?;
                text = Some(value);
            }
            _ => {}
        }
    }

    Ok(ProcessRequest::Form { file, text })
}

async fn read_json(request: Request) -> Result<ProcessRequest, ProcessError> {
    let body = Bytes::from_request(request, &())
        .await
        .map_err(|e| ProcessError::MalformedRequest(e.body_text()))?;

    // An unparsable body counts as an empty one.
    let text = serde_json::from_slice::<TextBody>(&body)
        .ok()
        .and_then(|b| b.text);

    Ok(ProcessRequest::Json { text })
}
