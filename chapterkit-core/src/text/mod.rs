//! Plain-text passes applied to a chapter draft before it is written

mod normalize;
mod title;

pub use normalize::normalize;
pub use title::{extract_title, UNTITLED};
