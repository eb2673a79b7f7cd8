//! Progress report command

use anyhow::Result;
use chapterkit_core::progress::{scan, ProgressReport};
use chapterkit_core::{BookLayout, ChapterError};

/// Print chapter completion per part and overall
pub fn progress(layout: &BookLayout, json: bool) -> Result<()> {
    let report = match scan(layout) {
        Ok(report) => report,
        Err(ChapterError::OutputRootNotFound(root)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ProgressReport::default())?);
            } else {
                println!("Directory not found: {}", root.display());
                println!("No chapters yet");
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Progress:\n");
    for part in &report.parts {
        println!(
            "{}: {} {}/{} ({:.0}%)",
            part.name,
            part.bar(),
            part.filled,
            part.total,
            part.percentage()
        );
    }

    if report.is_empty() {
        println!("\nNo chapters yet");
    } else {
        println!(
            "\nTotal: {}/{} chapters ({:.1}%)",
            report.filled(),
            report.total(),
            report.percentage()
        );
    }

    Ok(())
}
