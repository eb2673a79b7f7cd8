//! Chapter identifier: a (part, chapter) pair

use crate::error::ChapterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one chapter of the book by part and chapter number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChapterId {
    /// Part number
    pub part: u32,

    /// Chapter number within the part
    pub chapter: u32,
}

impl ChapterId {
    pub fn new(part: u32, chapter: u32) -> Self {
        Self { part, chapter }
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.part, self.chapter)
    }
}

impl FromStr for ChapterId {
    type Err = ChapterError;

    /// Parse the exact `<part>-<chapter>` form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || ChapterError::UnrecognizedFilename(s.to_string());
        let (part, chapter) = s.split_once('-').ok_or_else(unrecognized)?;
        let part = part.parse().map_err(|_| unrecognized())?;
        let chapter = chapter.parse().map_err(|_| unrecognized())?;
        Ok(Self::new(part, chapter))
    }
}
