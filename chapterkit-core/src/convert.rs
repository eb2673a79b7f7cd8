//! Single-file conversion: draft text in, chapter markdown out

use crate::error::{ChapterError, Result};
use crate::navigation::{inject_navigation, ChapterNavigator, SamePartNavigator};
use crate::text::{extract_title, normalize};
use crate::types::{BookLayout, ChapterId};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Chapter that was written
    pub id: ChapterId,

    /// Path of the written markdown file
    pub output: PathBuf,

    /// Title found in the draft
    pub title: String,
}

/// Converts drafts into chapter files laid out by a [`BookLayout`]
pub struct ChapterConverter {
    layout: BookLayout,
    navigator: Box<dyn ChapterNavigator>,
}

impl ChapterConverter {
    pub fn new(layout: BookLayout) -> Self {
        Self {
            layout,
            navigator: Box::new(SamePartNavigator),
        }
    }

    /// Use a different navigator for footer links
    pub fn with_navigator(mut self, navigator: impl ChapterNavigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    /// Run the text pipeline on a draft: normalize, find the title and
    /// append a navigation footer. Returns the document and its title.
    pub fn render(&self, draft: &str, id: ChapterId) -> (String, String) {
        let cleaned = normalize(draft);
        let title = extract_title(&cleaned).to_string();
        let document = inject_navigation(&cleaned, id, self.navigator.as_ref(), &self.layout);
        (document, title)
    }

    /// Convert one draft file into `<root>/part-<p>/chapter-<p>-<c>.md`.
    ///
    /// Any existing chapter file is overwritten. The write is not atomic.
    pub fn convert_file(&self, input: &Path, id: ChapterId) -> Result<Conversion> {
        if !input.exists() {
            return Err(ChapterError::InputNotFound(input.to_path_buf()));
        }

        let draft = fs::read_to_string(input)?;
        let (document, title) = self.render(&draft, id);

        fs::create_dir_all(self.layout.part_dir(id.part))?;
        let output = self.layout.chapter_path(id);
        fs::write(&output, document)?;

        tracing::debug!("Wrote chapter {} from {:?} to {:?}", id, input, output);

        Ok(Conversion { id, output, title })
    }
}
