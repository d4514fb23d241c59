use regex::Regex;
use std::sync::LazyLock;

static TABS_AND_CARRIAGE_RETURNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\r]+").expect("static regex is valid"));
static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("static regex is valid"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static regex is valid"));

/// Cleans extracted or pasted text before it is summarized.
///
/// Steps run in a fixed order: NUL characters become spaces, runs of tabs and
/// carriage returns become a single space, runs of spaces collapse to one,
/// three or more newlines collapse to a paragraph break, and the result is
/// trimmed. Applying it twice yields the same output as applying it once.
pub fn normalize_text(raw: &str) -> String {
    let without_nul = raw.replace('\0', " ");
    let without_tabs = TABS_AND_CARRIAGE_RETURNS.replace_all(&without_nul, " ");
    let single_spaced = REPEATED_SPACES.replace_all(&without_tabs, " ");
    let paragraphs = EXCESS_NEWLINES.replace_all(&single_spaced, "\n\n");

    paragraphs.trim().to_string()
}
