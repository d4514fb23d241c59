use reelbrief::infrastructure::text_processing::normalize_text;

#[test]
fn given_tabs_and_carriage_returns_when_normalizing_then_become_single_space() {
    assert_eq!(normalize_text("a\t\t\tb\r\nc"), "a b \nc");
}

#[test]
fn given_repeated_spaces_when_normalizing_then_collapse_to_one() {
    assert_eq!(normalize_text("Hello     world"), "Hello world");
}

#[test]
fn given_many_blank_lines_when_normalizing_then_keep_one_paragraph_break() {
    assert_eq!(normalize_text("A\n\n\n\n\nB"), "A\n\nB");
    assert_eq!(normalize_text("A\n\nB"), "A\n\nB");
}

#[test]
fn given_nul_characters_when_normalizing_then_replaced_by_space() {
    assert_eq!(normalize_text("a\0b"), "a b");
    assert_eq!(normalize_text("a\0\0b"), "a b");
}

#[test]
fn given_surrounding_whitespace_when_normalizing_then_trimmed() {
    assert_eq!(normalize_text("\n\n  text  \n"), "text");
}

#[test]
fn given_whitespace_only_input_when_normalizing_then_returns_empty() {
    assert_eq!(normalize_text(""), "");
    assert_eq!(normalize_text(" \t\r\n\0 "), "");
}

#[test]
fn given_normalized_text_when_normalizing_again_then_unchanged() {
    let samples = [
        "plain",
        "  a\t\tb  \r\n\n\n\nc\0d  ",
        "x \n \n \n y",
        "\r\r\n\n\n\n\t\0",
        "unicode café\u{a0}\u{a0}text",
    ];

    for sample in samples {
        let once = normalize_text(sample);
        assert_eq!(normalize_text(&once), once, "sample: {sample:?}");
    }
}

#[test]
fn given_non_breaking_spaces_when_normalizing_then_left_untouched() {
    assert_eq!(normalize_text("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");
}
