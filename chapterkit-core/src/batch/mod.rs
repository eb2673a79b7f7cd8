//! Directory-wide conversion of draft files

mod parser;

pub use parser::{IdentifierParser, NumericPairParser};

use crate::convert::{ChapterConverter, Conversion};
use crate::error::{ChapterError, Result};
use crate::types::ChapterId;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of draft files picked up by a batch run
pub const DRAFT_EXTENSION: &str = "txt";

/// What happened to one file of a batch
#[derive(Debug)]
pub enum BatchOutcome {
    /// The file was converted
    Converted(Conversion),

    /// No identifier could be read from the file name
    Skipped { file: PathBuf },

    /// Conversion was attempted and failed
    Failed {
        file: PathBuf,
        id: ChapterId,
        error: ChapterError,
    },
}

/// List draft files directly inside `dir`, sorted by file name
pub fn find_drafts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ChapterError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(DRAFT_EXTENSION))
        .collect();

    if files.is_empty() {
        return Err(ChapterError::NoInputFiles(dir.to_path_buf()));
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Convert every draft in `dir`.
///
/// Files are processed in name order and each one independently: a skipped
/// or failed file does not stop the run, and earlier conversions are kept.
/// `on_outcome` is called as each file finishes.
pub fn convert_dir(
    dir: &Path,
    converter: &ChapterConverter,
    parser: &dyn IdentifierParser,
    on_outcome: impl FnMut(&BatchOutcome),
) -> Result<Vec<BatchOutcome>> {
    let files = find_drafts(dir)?;
    tracing::debug!("Found {} draft files in {:?}", files.len(), dir);

    Ok(convert_files(files, converter, parser, on_outcome))
}

/// Convert an already collected list of drafts, in the order given
pub fn convert_files(
    files: Vec<PathBuf>,
    converter: &ChapterConverter,
    parser: &dyn IdentifierParser,
    mut on_outcome: impl FnMut(&BatchOutcome),
) -> Vec<BatchOutcome> {
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let outcome = convert_one(file, converter, parser);
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    outcomes
}

fn convert_one(
    file: PathBuf,
    converter: &ChapterConverter,
    parser: &dyn IdentifierParser,
) -> BatchOutcome {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let id = match parser.parse(&stem) {
        Ok(id) => id,
        Err(_) => {
            tracing::debug!("No chapter identifier in {:?}", file);
            return BatchOutcome::Skipped { file };
        }
    };

    match converter.convert_file(&file, id) {
        Ok(conversion) => BatchOutcome::Converted(conversion),
        Err(error) => BatchOutcome::Failed { file, id, error },
    }
}
