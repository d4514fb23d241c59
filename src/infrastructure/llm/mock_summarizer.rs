use async_trait::async_trait;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{SummarizeOptions, SummarizeResult};

/// Offline stand-in for the hosted model: echoes the first `max_words` words.
pub struct MockSummarizer;

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<SummarizeResult, SummarizerError> {
        let summary = text
            .split_whitespace()
            .take(options.max_words)
            .collect::<Vec<_>>()
            .join(" ");

        if summary.is_empty() {
            return Err(SummarizerError::EmptyResponse);
        }

        Ok(SummarizeResult {
            language: options.reported_language().to_string(),
            summary,
        })
    }
}
