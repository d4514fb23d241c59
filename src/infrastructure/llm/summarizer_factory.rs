use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::Summarizer;
use crate::presentation::config::{LlmSettings, SummarizerProvider};

use super::gemini_client::GeminiClient;
use super::mock_summarizer::MockSummarizer;

pub struct SummarizerFactory;

#[derive(Debug, thiserror::Error)]
pub enum SummarizerFactoryError {
    #[error("summarizer initialization failed: {0}")]
    InitializationFailed(String),
}

impl SummarizerFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn Summarizer>, SummarizerFactoryError> {
        match settings.provider {
            SummarizerProvider::Gemini => {
                let client = GeminiClient::new(
                    settings.api_key.clone(),
                    settings.model.clone(),
                    &settings.base_url,
                    Duration::from_secs(settings.timeout_secs),
                )
                .map_err(|e| SummarizerFactoryError::InitializationFailed(e.to_string()))?;

                if client.has_credential() {
                    tracing::info!(model = %settings.model, "Using Gemini summarizer");
                } else {
                    tracing::warn!(
                        model = %settings.model,
                        "Gemini API key not configured; summarization requests will fail"
                    );
                }

                Ok(Arc::new(client))
            }
            SummarizerProvider::Mock => {
                tracing::info!("Using mock summarizer");
                Ok(Arc::new(MockSummarizer))
            }
        }
    }
}
