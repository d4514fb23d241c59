pub const DEFAULT_MAX_WORDS: usize = 100;
pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeOptions {
    pub max_words: usize,
    pub language_hint: Option<String>,
}

impl SummarizeOptions {
    pub fn new(max_words: usize, language_hint: Option<String>) -> Self {
        Self {
            max_words,
            language_hint,
        }
    }

    /// The language reported back to callers. Never inferred from the text.
    pub fn reported_language(&self) -> &str {
        self.language_hint.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            language_hint: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeResult {
    pub language: String,
    pub summary: String,
}
