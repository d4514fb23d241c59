use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{SummarizeOptions, SummarizeResult};
use crate::infrastructure::observability::preview_for_log;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// Summarizes text through the Gemini `generateContent` REST endpoint.
///
/// The credential is injected at construction. A missing key is reported on
/// the first call rather than at startup, so the service can boot without one.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, api_key: &str, prompt: String) -> Result<String, SummarizerError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        let raw = response
            .bytes()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        let parsed: Result<GenerateContentResponse, _> = serde_json::from_slice(&raw);

        if !status.is_success() {
            let detail = parsed
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&raw).into_owned());
            return Err(SummarizerError::ApiRequestFailed(format!(
                "HTTP {status}: {detail}"
            )));
        }

        let body = parsed.map_err(|e| {
            tracing::error!(
                raw_response = %preview_for_log(&String::from_utf8_lossy(&raw)),
                "Failed to parse Gemini response"
            );
            SummarizerError::InvalidResponse(e.to_string())
        })?;

        if let Some(error) = body.error {
            return Err(SummarizerError::ApiRequestFailed(error.message));
        }

        let text: String = body
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

/// Instruction sent to the model. The input text is appended verbatim.
pub fn build_summary_prompt(text: &str, options: &SummarizeOptions) -> String {
    let language = options
        .language_hint
        .as_deref()
        .map(|hint| format!(" in {hint}"))
        .unwrap_or_default();

    format!(
        "Summarize this PIB press release{language} in under {max_words} words with a clear, \
press-release style tone. Return only the summary without preface or notes.\n\nTEXT:\n{text}",
        max_words = options.max_words
    )
}

#[async_trait]
impl Summarizer for GeminiClient {
    #[tracing::instrument(skip(self, text, options), fields(model = %self.model, chars = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<SummarizeResult, SummarizerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SummarizerError::MissingCredential)?;

        let prompt = build_summary_prompt(text, options);
        let summary = self.generate(api_key, prompt).await?.trim().to_string();

        if summary.is_empty() {
            tracing::warn!("Gemini returned an empty summary");
            return Err(SummarizerError::EmptyResponse);
        }

        tracing::info!(summary_chars = summary.len(), "Summary generated");

        Ok(SummarizeResult {
            language: options.reported_language().to_string(),
            summary,
        })
    }
}
