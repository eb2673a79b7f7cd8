//! Rendering and stripping of the navigation footer block

use regex::Regex;
use std::sync::LazyLock;

pub const PREVIOUS_LABEL: &str = "Previous chapter";
pub const NEXT_LABEL: &str = "Next chapter";

/// Link targets placed in a footer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Render the footer: a horizontal rule followed by whichever links exist
pub fn render_footer(links: &NavigationLinks) -> String {
    let mut footer = String::from("\n\n---\n\n");

    if let Some(prev) = &links.previous {
        footer.push_str(&format!("← [{PREVIOUS_LABEL}]({prev})\n\n"));
    }

    if let Some(next) = &links.next {
        footer.push_str(&format!("[{NEXT_LABEL}]({next}) →\n"));
    }

    footer
}

/// Remove a trailing navigation footer, along with trailing whitespace.
///
/// A footer is a `---` rule after a blank line (or at the very start) that
/// ends the text, optionally followed by a previous link and a next link.
/// Only the last such block is removed; a rule directly under a line of
/// text is a setext heading and is left alone.
pub fn strip_footer(text: &str) -> &str {
    static FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!(
            r"(?:\A|\n\n)---\n*(?:← \[{PREVIOUS_LABEL}\]\([^)\n]*\)\n*)?(?:\[{NEXT_LABEL}\]\([^)\n]*\) →\n*)?\z"
        ))
        .expect("valid regex")
    });

    let trimmed = text.trim_end();
    match FOOTER_RE.find(trimmed) {
        Some(m) => trimmed[..m.start()].trim_end(),
        None => trimmed,
    }
}
