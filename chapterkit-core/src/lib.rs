//! ChapterKit Core Library
//!
//! This crate turns plain-text chapter drafts into markdown files laid out
//! as `<root>/part-<p>/chapter-<p>-<c>.md`, appends navigation footers and
//! reports how much of the book has been filled in.

pub mod batch;
pub mod convert;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod text;
pub mod types;

pub use batch::{BatchOutcome, IdentifierParser, NumericPairParser};
pub use convert::{ChapterConverter, Conversion};
pub use error::{ChapterError, Result};
pub use navigation::{ChapterNavigator, SamePartNavigator};
pub use progress::{PartProgress, ProgressReport};
pub use types::{BookLayout, ChapterId};
