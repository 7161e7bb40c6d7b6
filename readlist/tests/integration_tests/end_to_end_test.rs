// tests/integration_tests/end_to_end_test.rs
use super::common::{FULL_HEADER_202301, create_test_file, fixed_now, setup_notes_directory};
use anyhow::Result;
use readlist::{IterationOrder, Outcome, RunConfig, run_transfer};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_single_note_end_to_end() -> Result<()> {
    let src = TempDir::new()?;
    let out = TempDir::new()?;
    create_test_file(
        src.path(),
        "entry-20230115.md",
        "## Readlist\n- first link\n\n- second link\n",
    )?;

    run_transfer(src.path(), out.path(), &RunConfig::default(), fixed_now())?;

    let digest = fs::read_to_string(out.path().join("202301.md"))?;
    assert_eq!(
        digest,
        format!("{FULL_HEADER_202301}## 20230115\n\n- first link\n- second link\n\n")
    );
    Ok(())
}

#[test]
fn test_directory_is_grouped_by_month() -> Result<()> {
    let src = setup_notes_directory()?;
    let out = TempDir::new()?;
    let config = RunConfig {
        order: IterationOrder::Forward,
        ..RunConfig::default()
    };

    let report = run_transfer(src.path(), out.path(), &config, fixed_now())?;

    assert_eq!(report.discovered, 5, "txt files and subdirectories are not listed");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.written_files(), 3);
    assert_eq!(report.written_lines(), 4);

    let mut digests: Vec<_> = fs::read_dir(out.path())?
        .filter_map(|entry| Some(entry.ok()?.file_name().to_string_lossy().into_owned()))
        .collect();
    digests.sort();
    assert_eq!(digests, vec!["202301.md", "202302.md"]);

    let january = fs::read_to_string(out.path().join("202301.md"))?;
    assert!(january.starts_with(FULL_HEADER_202301));
    assert_eq!(january.matches("title = ").count(), 1);
    let first = january.find("## 20230115").unwrap();
    let second = january.find("## 20230120").unwrap();
    assert!(first < second);

    let february = fs::read_to_string(out.path().join("202302.md"))?;
    assert!(february.ends_with("## 20230203\n\n- The Rustonomicon\n\n"));
    Ok(())
}

#[test]
fn test_note_without_section_creates_nothing() -> Result<()> {
    let src = TempDir::new()?;
    let out = TempDir::new()?;
    create_test_file(src.path(), "entry-20230301.md", "## Journal\n- nothing read\n")?;

    let report = run_transfer(src.path(), out.path(), &RunConfig::default(), fixed_now())?;

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].outcome, Outcome::Empty);
    assert!(!out.path().join("202303.md").exists());
    Ok(())
}

#[test]
fn test_rerun_rewrites_digest() -> Result<()> {
    let src = TempDir::new()?;
    let out = TempDir::new()?;
    create_test_file(src.path(), "entry-20230115.md", "## Readlist\n- link\n")?;

    run_transfer(src.path(), out.path(), &RunConfig::default(), fixed_now())?;
    run_transfer(src.path(), out.path(), &RunConfig::default(), fixed_now())?;

    let digest = fs::read_to_string(out.path().join("202301.md"))?;
    assert_eq!(digest.matches("## 20230115").count(), 1);
    Ok(())
}
