mod gemini_client;
mod mock_summarizer;
mod summarizer_factory;

pub use gemini_client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, build_summary_prompt};
pub use mock_summarizer::MockSummarizer;
pub use summarizer_factory::{SummarizerFactory, SummarizerFactoryError};
