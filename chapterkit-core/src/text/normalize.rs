//! Whitespace normalization for chapter drafts

use regex::Regex;
use std::sync::LazyLock;

/// Clean up a raw draft.
///
/// Strips trailing whitespace from every line, collapses runs of blank
/// lines down to a single blank line and trims the document as a whole.
/// Lines are stripped before collapsing so that whitespace-only lines
/// cannot hide a run of newlines.
pub fn normalize(text: &str) -> String {
    static BLANK_RUN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

    let stripped = text
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    BLANK_RUN_RE
        .replace_all(&stripped, "\n\n")
        .trim()
        .to_string()
}
