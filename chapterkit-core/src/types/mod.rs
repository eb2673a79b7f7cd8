//! Core types shared by the conversion pipeline

mod chapter_id;
mod layout;

pub use chapter_id::ChapterId;
pub use layout::{BookLayout, DEFAULT_ROOT};
