//! Navigation footers linking a chapter to its neighbours
//!
//! Finding the neighbours of a chapter is delegated to a [`ChapterNavigator`].
//! The only navigator shipped here, [`SamePartNavigator`], knows nothing about
//! the shape of the book: it can point back one chapter inside the same part
//! and nothing else. Linking across parts and forward links are left to
//! navigators that have a real table of contents to work from.

mod footer;

pub use footer::{render_footer, strip_footer, NavigationLinks, NEXT_LABEL, PREVIOUS_LABEL};

use crate::types::{BookLayout, ChapterId};

/// Resolves the chapters adjacent to a given chapter
pub trait ChapterNavigator {
    /// The chapter before `id`, if known
    fn previous(&self, id: ChapterId) -> Option<ChapterId>;

    /// The chapter after `id`, if known
    fn next(&self, id: ChapterId) -> Option<ChapterId>;
}

/// Navigator that only knows `chapter - 1` within the same part.
///
/// The first chapter of a part gets no previous link even when an earlier
/// part exists, and no chapter ever gets a next link.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamePartNavigator;

impl ChapterNavigator for SamePartNavigator {
    fn previous(&self, id: ChapterId) -> Option<ChapterId> {
        (id.chapter > 1).then(|| ChapterId::new(id.part, id.chapter - 1))
    }

    fn next(&self, _id: ChapterId) -> Option<ChapterId> {
        None
    }
}

/// Resolve the footer links for a chapter
pub fn links_for(
    navigator: &dyn ChapterNavigator,
    layout: &BookLayout,
    id: ChapterId,
) -> NavigationLinks {
    NavigationLinks {
        previous: navigator.previous(id).map(|prev| layout.chapter_link(prev)),
        next: navigator.next(id).map(|next| layout.chapter_link(next)),
    }
}

/// Replace any existing navigation footer on `text` with a fresh one
pub fn inject_navigation(
    text: &str,
    id: ChapterId,
    navigator: &dyn ChapterNavigator,
    layout: &BookLayout,
) -> String {
    let links = links_for(navigator, layout, id);
    let mut out = strip_footer(text).to_string();
    out.push_str(&render_footer(&links));
    out
}
