//! Chapter title detection

use regex::Regex;
use std::sync::LazyLock;

/// Label used when a draft has no heading
pub const UNTITLED: &str = "Untitled";

/// Find the chapter title.
///
/// Prefers the first level-1 heading, then the first level-2 heading,
/// and falls back to [`UNTITLED`].
pub fn extract_title(text: &str) -> &str {
    static H1_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^#\s+(.+)$").expect("valid regex"));
    static H2_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^##\s+(.+)$").expect("valid regex"));

    first_capture(text, &H1_RE)
        .or_else(|| first_capture(text, &H2_RE))
        .unwrap_or(UNTITLED)
}

fn first_capture<'a>(text: &'a str, re: &Regex) -> Option<&'a str> {
    text.lines()
        .find_map(|line| re.captures(line).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
}
