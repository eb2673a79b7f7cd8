//! Completion report over the converted chapter tree

use crate::error::{ChapterError, Result};
use crate::types::BookLayout;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Number of segments in a progress bar
pub const BAR_WIDTH: usize = 10;

const FILLED_SEGMENT: char = '█';
const EMPTY_SEGMENT: char = '░';

/// Progress of a single part directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartProgress {
    /// Directory name, e.g. `part-3`
    pub name: String,

    /// Chapter files larger than the fill threshold
    pub filled: usize,

    /// All chapter files in the part
    pub total: usize,
}

impl PartProgress {
    pub fn percentage(&self) -> f64 {
        percentage(self.filled, self.total)
    }

    /// Bar of [`BAR_WIDTH`] segments, one filled segment per full 10%
    pub fn bar(&self) -> String {
        let filled = if self.total == 0 {
            0
        } else {
            (self.filled * BAR_WIDTH / self.total).min(BAR_WIDTH)
        };
        let mut bar = String::with_capacity(BAR_WIDTH * FILLED_SEGMENT.len_utf8());
        bar.extend(std::iter::repeat(FILLED_SEGMENT).take(filled));
        bar.extend(std::iter::repeat(EMPTY_SEGMENT).take(BAR_WIDTH - filled));
        bar
    }
}

/// Progress over the whole book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// Parts that contain at least one chapter file, sorted by name
    pub parts: Vec<PartProgress>,
}

impl ProgressReport {
    pub fn filled(&self) -> usize {
        self.parts.iter().map(|p| p.filled).sum()
    }

    pub fn total(&self) -> usize {
        self.parts.iter().map(|p| p.total).sum()
    }

    pub fn percentage(&self) -> f64 {
        percentage(self.filled(), self.total())
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn percentage(filled: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        filled as f64 / total as f64 * 100.0
    }
}

/// Walk the layout root and count filled chapters per part.
///
/// Only immediate part directories are visited and only `chapter-*.md`
/// files inside them are counted. Parts without chapter files are left out.
pub fn scan(layout: &BookLayout) -> Result<ProgressReport> {
    let root = layout.root();
    if !root.is_dir() {
        return Err(ChapterError::OutputRootNotFound(root.to_path_buf()));
    }

    let mut part_dirs: Vec<(String, PathBuf)> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            let name = e.file_name().to_str()?.to_string();
            layout.is_part_dir_name(&name).then(|| (name, e.path()))
        })
        .collect();
    part_dirs.sort();

    let mut report = ProgressReport::default();
    for (name, dir) in part_dirs {
        let mut total = 0;
        let mut filled = 0;

        for entry in fs::read_dir(&dir)?.filter_map(|e| e.ok()) {
            let is_chapter = entry
                .file_name()
                .to_str()
                .map(|n| layout.is_chapter_file_name(n))
                .unwrap_or(false);
            if !is_chapter {
                continue;
            }
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            total += 1;
            if metadata.len() > layout.fill_threshold {
                filled += 1;
            }
        }

        tracing::debug!("Scanned {}: {}/{} filled", name, filled, total);

        if total > 0 {
            report.parts.push(PartProgress {
                name,
                filled,
                total,
            });
        }
    }

    Ok(report)
}
