// tests/integration_tests/listing_test.rs
use super::common::{create_test_file, setup_notes_directory};
use anyhow::Result;
use glob::Pattern;
use readlist::{DateExtractor, list_markdown_files};
use tempfile::TempDir;

#[test]
fn test_lists_direct_markdown_children() -> Result<()> {
    let dir = setup_notes_directory()?;

    let files = list_markdown_files(dir.path(), &Pattern::new("*.md")?)?;
    let names: Vec<_> = files
        .iter()
        .filter_map(|path| path.file_name()?.to_str())
        .collect();

    assert_eq!(
        names,
        vec![
            "entry-20230115.md",
            "entry-20230120.md",
            "entry-20230203.md",
            "entry-20230301.md",
            "notes.md",
        ]
    );
    Ok(())
}

#[test]
fn test_custom_include_pattern() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "daily-20230101.md", "")?;
    create_test_file(dir.path(), "weekly-20230102.md", "")?;

    let files = list_markdown_files(dir.path(), &Pattern::new("daily-*.md")?)?;
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("daily-20230101.md"));
    Ok(())
}

#[test]
fn test_dated_files_only() -> Result<()> {
    let dir = setup_notes_directory()?;
    let extractor = DateExtractor::new()?;

    let dated: Vec<_> = list_markdown_files(dir.path(), &Pattern::new("*.md")?)?
        .into_iter()
        .filter_map(|path| extractor.source_file(path))
        .map(|file| file.date().to_owned())
        .collect();

    assert_eq!(dated, vec!["20230115", "20230120", "20230203", "20230301"]);
    Ok(())
}
