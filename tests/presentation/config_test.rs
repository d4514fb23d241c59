use reelbrief::presentation::{Environment, Settings, SummarizerProvider};

#[test]
fn given_environment_aliases_when_parsing_then_maps_to_variants() {
    assert_eq!(
        Environment::try_from("development".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from(" TEST ".to_string()),
        Ok(Environment::Test)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_default_settings_when_created_then_match_documented_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.llm.provider, SummarizerProvider::Gemini);
    assert_eq!(settings.llm.model, "gemini-1.5-flash");
    assert_eq!(
        settings.llm.base_url,
        "https://generativelanguage.googleapis.com"
    );
    assert_eq!(settings.llm.timeout_secs, 60);
    assert!(settings.llm.api_key.is_none());
    assert_eq!(settings.extraction.max_file_size_mb, 20);
    assert_eq!(settings.extraction.max_file_size_bytes(), 20 * 1024 * 1024);
    assert_eq!(settings.logging.level, "info");
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_environment_variables_when_loading_then_override_defaults() {
    // Only test in this binary that touches process environment variables.
    unsafe {
        std::env::set_var("APP_SERVER__PORT", "8088");
        std::env::set_var("APP_LLM__PROVIDER", "mock");
        std::env::set_var("APP_EXTRACTION__PDF_ENABLED", "false");
        std::env::remove_var("APP_LLM__API_KEY");
        std::env::set_var("GEMINI_API_KEY", "legacy-key");
    }

    let settings = Settings::load(Environment::Test).unwrap();

    unsafe {
        std::env::remove_var("APP_SERVER__PORT");
        std::env::remove_var("APP_LLM__PROVIDER");
        std::env::remove_var("APP_EXTRACTION__PDF_ENABLED");
        std::env::remove_var("GEMINI_API_KEY");
    }

    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.llm.provider, SummarizerProvider::Mock);
    assert!(!settings.extraction.pdf_enabled);
    assert!(settings.extraction.docx_enabled);
    assert_eq!(settings.llm.api_key.as_deref(), Some("legacy-key"));
}
