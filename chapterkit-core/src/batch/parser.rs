//! Strategies for reading a chapter identifier out of a file name

use crate::error::{ChapterError, Result};
use crate::types::ChapterId;
use regex::Regex;
use std::sync::LazyLock;

/// Extracts a [`ChapterId`] from a file stem
pub trait IdentifierParser {
    /// Return the identifier encoded in `stem`, or
    /// [`ChapterError::UnrecognizedFilename`] when there is none
    fn parse(&self, stem: &str) -> Result<ChapterId>;
}

/// Takes the first `<digits>-<digits>` pair anywhere in the stem, so
/// `chapter-3-2`, `3-2` and `draft_3-2_final` all map to part 3, chapter 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericPairParser;

impl IdentifierParser for NumericPairParser {
    fn parse(&self, stem: &str) -> Result<ChapterId> {
        static PAIR_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"(\d+)-(\d+)").expect("valid regex"));

        let unrecognized = || ChapterError::UnrecognizedFilename(stem.to_string());
        let caps = PAIR_RE.captures(stem).ok_or_else(unrecognized)?;
        let part = caps[1].parse().map_err(|_| unrecognized())?;
        let chapter = caps[2].parse().map_err(|_| unrecognized())?;

        Ok(ChapterId::new(part, chapter))
    }
}
