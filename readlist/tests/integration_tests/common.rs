// tests/integration_tests/common.rs
use anyhow::Result;
use chrono::{DateTime, TimeZone as _, Utc};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FULL_HEADER_202301: &str = "+++\n\
title = 'ReadList - 202301'\n\
date = 2023-02-01T00:00:00+08:00\n\
draft = false\n\
description = \"阿树 2023 年 01 月的阅读记录，谨供参考\"\n\
+++\n\
\n\
> \"本文是阿树 2023 年 01 月的阅读记录，仅供参考，不对真实性和有效性作任何保障。\"\n";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 14, 9, 30, 0).unwrap()
}

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn daily_note(entries: &[&str]) -> String {
    format!(
        "# Daily\n\n## Journal\n- slept well\n\n## Readlist\n{}\n\n## Todo\n- \n",
        entries.join("\n")
    )
}

/// A source directory with two January notes, one February note, one note
/// without a Readlist section, and files the lister must ignore.
pub fn setup_notes_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "entry-20230115.md",
        &daily_note(&["- [Ownership](https://doc.rust-lang.org/book/ch04-00-understanding-ownership.html)", "", "- Zero to Production"]),
    )?;
    create_test_file(
        temp_dir.path(),
        "entry-20230120.md",
        &daily_note(&["- Designing Data-Intensive Applications"]),
    )?;
    create_test_file(
        temp_dir.path(),
        "entry-20230203.md",
        &daily_note(&["-", "- The Rustonomicon"]),
    )?;
    create_test_file(
        temp_dir.path(),
        "entry-20230301.md",
        "# Quiet day\n\n## Journal\n- nothing read\n",
    )?;
    create_test_file(temp_dir.path(), "notes.md", &daily_note(&["- undated"]))?;
    create_test_file(temp_dir.path(), "entry-20230401.txt", &daily_note(&["- not markdown"]))?;
    create_test_file(
        temp_dir.path(),
        "archive/entry-20221201.md",
        &daily_note(&["- nested"]),
    )?;

    Ok(temp_dir)
}
