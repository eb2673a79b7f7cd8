//! Single-file conversion command

use anyhow::Result;
use chapterkit_core::{BookLayout, ChapterConverter, ChapterError, ChapterId};
use std::path::Path;

/// Convert one draft into its chapter file
pub fn convert(input: &Path, part: u32, chapter: u32, layout: &BookLayout) -> Result<()> {
    let converter = ChapterConverter::new(layout.clone());

    match converter.convert_file(input, ChapterId::new(part, chapter)) {
        Ok(conversion) => {
            println!("Created {}", conversion.output.display());
            println!("  Title: {}", conversion.title);
            Ok(())
        }
        Err(ChapterError::InputNotFound(path)) => {
            println!("File not found: {}", path.display());
            tracing::warn!("Nothing converted, {:?} does not exist", path);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
