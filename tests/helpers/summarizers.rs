use std::sync::Mutex;

use reelbrief::application::ports::{Summarizer, SummarizerError};
use reelbrief::domain::{SummarizeOptions, SummarizeResult};

pub const MOCK_SUMMARY: &str = "Mock summary";

/// Records every call and answers with a fixed summary.
#[derive(Default)]
pub struct RecordingSummarizer {
    calls: Mutex<Vec<(String, SummarizeOptions)>>,
}

impl RecordingSummarizer {
    pub fn calls(&self) -> Vec<(String, SummarizeOptions)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.calls().last().map(|(text, _)| text.clone())
    }
}

#[async_trait::async_trait]
impl Summarizer for RecordingSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<SummarizeResult, SummarizerError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), options.clone()));

        Ok(SummarizeResult {
            language: options.reported_language().to_string(),
            summary: MOCK_SUMMARY.to_string(),
        })
    }
}

pub struct FailingSummarizer {
    missing_credential: bool,
    message: String,
}

impl FailingSummarizer {
    pub fn missing_credential() -> Self {
        Self {
            missing_credential: true,
            message: String::new(),
        }
    }

    pub fn upstream(message: &str) -> Self {
        Self {
            missing_credential: false,
            message: message.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _options: &SummarizeOptions,
    ) -> Result<SummarizeResult, SummarizerError> {
        if self.missing_credential {
            Err(SummarizerError::MissingCredential)
        } else {
            Err(SummarizerError::ApiRequestFailed(self.message.clone()))
        }
    }
}
