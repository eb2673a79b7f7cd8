//! Batch conversion command implementation

use anyhow::Result;
use chapterkit_core::batch::{convert_files, find_drafts, BatchOutcome};
use chapterkit_core::{BookLayout, ChapterConverter, ChapterError, NumericPairParser};
use std::path::Path;

/// Convert every draft in a directory, one file at a time
pub fn batch(input_dir: &Path, layout: &BookLayout) -> Result<()> {
    let files = match find_drafts(input_dir) {
        Ok(files) => files,
        Err(ChapterError::DirectoryNotFound(dir)) => {
            println!("Directory not found: {}", dir.display());
            return Ok(());
        }
        Err(ChapterError::NoInputFiles(dir)) => {
            println!("No .txt files found in {}", dir.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Found {} files\n", files.len());

    let converter = ChapterConverter::new(layout.clone());
    convert_files(files, &converter, &NumericPairParser, report_outcome);

    println!("\nConversion finished");
    Ok(())
}

fn report_outcome(outcome: &BatchOutcome) {
    match outcome {
        BatchOutcome::Converted(conversion) => {
            println!(
                "Converted part {}, chapter {} -> {}",
                conversion.id.part,
                conversion.id.chapter,
                conversion.output.display()
            );
            println!("  Title: {}", conversion.title);
            tracing::info!("Converted chapter {}", conversion.id);
        }
        BatchOutcome::Skipped { file } => {
            let name = file.file_name().unwrap_or(file.as_os_str());
            println!(
                "Skipping {} (cannot determine chapter number)",
                name.to_string_lossy()
            );
            tracing::warn!("Skipped {:?}", file);
        }
        BatchOutcome::Failed { file, id, error } => {
            println!("Failed to convert {} as {}: {}", file.display(), id, error);
            tracing::error!("Failed to convert {:?}: {}", file, error);
        }
    }
}
