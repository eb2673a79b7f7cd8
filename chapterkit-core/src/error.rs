//! Error types for ChapterKit Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChapterError
pub type Result<T> = std::result::Result<T, ChapterError>;

/// Top-level error type for all ChapterKit operations
#[derive(Debug, Error)]
pub enum ChapterError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No .txt files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("Output directory not found: {}", .0.display())]
    OutputRootNotFound(PathBuf),

    #[error("Cannot determine part and chapter from '{0}'")]
    UnrecognizedFilename(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
