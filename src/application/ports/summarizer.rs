use async_trait::async_trait;

use crate::domain::{SummarizeOptions, SummarizeResult};

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<SummarizeResult, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,
    #[error("summarization request failed: {0}")]
    ApiRequestFailed(String),
    #[error("summarization rate limited")]
    RateLimited,
    #[error("invalid summarization response: {0}")]
    InvalidResponse(String),
    #[error("summarization returned no text")]
    EmptyResponse,
}
