use reelbrief::domain::SummarizeOptions;

#[test]
fn given_default_options_when_created_then_limits_to_one_hundred_words() {
    let options = SummarizeOptions::default();

    assert_eq!(options.max_words, 100);
    assert_eq!(options.language_hint, None);
}

#[test]
fn given_no_language_hint_when_reporting_language_then_returns_english() {
    let options = SummarizeOptions::new(50, None);

    assert_eq!(options.reported_language(), "English");
}

#[test]
fn given_language_hint_when_reporting_language_then_echoes_hint() {
    let options = SummarizeOptions::new(50, Some("Hindi".to_string()));

    assert_eq!(options.reported_language(), "Hindi");
}
