//! Output directory layout and naming convention

use super::ChapterId;
use std::path::{Path, PathBuf};

/// Default output root, relative to the working directory
pub const DEFAULT_ROOT: &str = "docs/chapters";

/// Where converted chapters live and how they are named.
///
/// Every output path is a pure function of the [`ChapterId`], so two
/// distinct identifiers never map to the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLayout {
    /// Output root directory
    pub root: PathBuf,

    /// Prefix of each part directory under the root
    pub part_prefix: String,

    /// Prefix used when building navigation links
    pub link_base: String,

    /// A chapter file larger than this many bytes counts as filled
    pub fill_threshold: u64,
}

impl BookLayout {
    /// Create a layout rooted at the given directory, other settings default
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the navigation link prefix
    pub fn with_link_base(mut self, link_base: impl Into<String>) -> Self {
        self.link_base = link_base.into();
        self
    }

    /// Set the filled-chapter size threshold
    pub fn with_fill_threshold(mut self, bytes: u64) -> Self {
        self.fill_threshold = bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name for a part, e.g. `part-3`
    pub fn part_dir_name(&self, part: u32) -> String {
        format!("{}{}", self.part_prefix, part)
    }

    /// Directory holding every chapter of a part
    pub fn part_dir(&self, part: u32) -> PathBuf {
        self.root.join(self.part_dir_name(part))
    }

    /// File name of a chapter, e.g. `chapter-3-2.md`
    pub fn chapter_file_name(&self, id: ChapterId) -> String {
        format!("chapter-{}-{}.md", id.part, id.chapter)
    }

    /// Full output path of a chapter
    pub fn chapter_path(&self, id: ChapterId) -> PathBuf {
        self.part_dir(id.part).join(self.chapter_file_name(id))
    }

    /// Link target used in navigation footers
    pub fn chapter_link(&self, id: ChapterId) -> String {
        format!(
            "{}/{}/{}",
            self.link_base.trim_end_matches('/'),
            self.part_dir_name(id.part),
            self.chapter_file_name(id)
        )
    }

    /// Whether a directory name looks like a part directory
    pub fn is_part_dir_name(&self, name: &str) -> bool {
        name.starts_with(&self.part_prefix)
    }

    /// Whether a file name looks like a chapter file
    pub fn is_chapter_file_name(&self, name: &str) -> bool {
        name.starts_with("chapter-") && name.ends_with(".md")
    }
}

impl Default for BookLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            part_prefix: "part-".to_string(),
            link_base: "/chapters".to_string(),
            fill_threshold: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_path() {
        let layout = BookLayout::new("out");
        let path = layout.chapter_path(ChapterId::new(3, 2));
        assert_eq!(path, Path::new("out").join("part-3").join("chapter-3-2.md"));
    }

    #[test]
    fn test_chapter_link() {
        let layout = BookLayout::default();
        assert_eq!(
            layout.chapter_link(ChapterId::new(2, 4)),
            "/chapters/part-2/chapter-2-4.md"
        );

        let layout = layout.with_link_base("/book/");
        assert_eq!(
            layout.chapter_link(ChapterId::new(1, 1)),
            "/book/part-1/chapter-1-1.md"
        );
    }

    #[test]
    fn test_distinct_ids_never_collide() {
        let layout = BookLayout::default();
        // 1-12 vs 11-2 share the same digits
        assert_ne!(
            layout.chapter_path(ChapterId::new(1, 12)),
            layout.chapter_path(ChapterId::new(11, 2))
        );
    }

    #[test]
    fn test_name_filters() {
        let layout = BookLayout::default();
        assert!(layout.is_part_dir_name("part-1"));
        assert!(!layout.is_part_dir_name("drafts"));
        assert!(layout.is_chapter_file_name("chapter-1-1.md"));
        assert!(!layout.is_chapter_file_name("chapter-1-1.txt"));
        assert!(!layout.is_chapter_file_name("index.md"));
    }
}
