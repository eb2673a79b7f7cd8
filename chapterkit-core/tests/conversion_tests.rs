//! End-to-end tests for chapterkit-core
//!
//! Every test redirects the layout root into a temporary directory and
//! drives the public API the same way the CLI does.

use chapterkit_core::batch::{convert_dir, BatchOutcome};
use chapterkit_core::progress;
use chapterkit_core::{BookLayout, ChapterConverter, ChapterId, NumericPairParser};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a draft file and return its path
fn write_draft(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write draft");
    path
}

fn layout_in(dir: &TempDir) -> BookLayout {
    BookLayout::new(dir.path().join("chapters"))
}

#[test]
fn test_convert_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let layout = layout_in(&temp_dir);
    let input = write_draft(&temp_dir, "draft.txt", "# Title\n\n\n\nBody text   \n");

    let converter = ChapterConverter::new(layout.clone());
    let conversion = converter.convert_file(&input, ChapterId::new(3, 2)).unwrap();

    let expected_path = temp_dir
        .path()
        .join("chapters")
        .join("part-3")
        .join("chapter-3-2.md");
    assert_eq!(conversion.output, expected_path);
    assert_eq!(conversion.title, "Title");

    let written = fs::read_to_string(&expected_path).unwrap();
    assert!(written.starts_with("# Title\n\nBody text"));
    insta::assert_snapshot!(written, @r"
    # Title

    Body text

    ---

    ← [Previous chapter](/chapters/part-3/chapter-3-1.md)
    ");
}

#[test]
fn test_reconvert_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let layout = layout_in(&temp_dir);
    let converter = ChapterConverter::new(layout.clone());
    let id = ChapterId::new(1, 2);
    let input = write_draft(&temp_dir, "draft.txt", "## Section\n\nText");

    converter.convert_file(&input, id).unwrap();
    let first = fs::read_to_string(layout.chapter_path(id)).unwrap();

    // Feed the converted chapter back in as a draft
    let conversion = converter
        .convert_file(&layout.chapter_path(id), id)
        .unwrap();
    let second = fs::read_to_string(&conversion.output).unwrap();

    assert_eq!(conversion.title, "Section");
    assert_eq!(first, second);
}

#[test]
fn test_batch_skips_unrecognized_names() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("drafts");
    fs::create_dir(&input_dir).unwrap();
    fs::write(input_dir.join("chapter-3-2.txt"), "# Two\n\nBody").unwrap();
    fs::write(input_dir.join("notes.txt"), "# Notes").unwrap();

    let layout = layout_in(&temp_dir);
    let converter = ChapterConverter::new(layout.clone());
    let outcomes = convert_dir(&input_dir, &converter, &NumericPairParser, |_| {}).unwrap();

    assert_eq!(outcomes.len(), 2);
    match &outcomes[0] {
        BatchOutcome::Converted(conversion) => {
            assert_eq!(conversion.id, ChapterId::new(3, 2));
            assert_eq!(conversion.title, "Two");
        }
        other => panic!("expected conversion, got {:?}", other),
    }
    assert!(matches!(&outcomes[1], BatchOutcome::Skipped { file } if file.ends_with("notes.txt")));

    assert!(layout.chapter_path(ChapterId::new(3, 2)).exists());
    let part_dirs: Vec<_> = fs::read_dir(layout.root()).unwrap().collect();
    assert_eq!(part_dirs.len(), 1);
}

#[test]
fn test_progress_after_batch() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("drafts");
    fs::create_dir(&input_dir).unwrap();
    fs::write(
        input_dir.join("1-1.txt"),
        format!("# Long\n\n{}", "word ".repeat(200)),
    )
    .unwrap();
    fs::write(input_dir.join("1-2.txt"), "# Short").unwrap();

    let layout = layout_in(&temp_dir);
    let converter = ChapterConverter::new(layout.clone());
    convert_dir(&input_dir, &converter, &NumericPairParser, |_| {}).unwrap();

    let report = progress::scan(&layout).unwrap();
    assert_eq!(report.parts.len(), 1);
    assert_eq!(report.parts[0].name, "part-1");
    assert_eq!(report.parts[0].filled, 1);
    assert_eq!(report.parts[0].total, 2);
    assert_eq!(report.percentage(), 50.0);
}
