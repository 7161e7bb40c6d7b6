// src/core/lister.rs
use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Lists the regular files directly inside `dir` whose names match `include`.
///
/// Subdirectories are not descended into. Entries come back sorted by file
/// name.
///
/// # Arguments
///
/// * `dir` - The directory holding the notes
/// * `include` - Glob matched against each file name, e.g. `*.md`
///
/// # Errors
///
/// This function may return an error if:
/// * `dir` does not exist, is not a directory, or cannot be read
/// * The directory entries cannot be enumerated
#[inline]
pub fn list_markdown_files(dir: &Path, include: &Pattern) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(dir)
        .with_context(|| format!("Failed to read source directory: {}", dir.display()))?;
    if !metadata.is_dir() {
        bail!("Source path is not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to list source directory: {}", dir.display()))?;

        let name = entry.file_name().to_string_lossy();
        if !include.matches(&name) {
            continue;
        }
        if entry.file_name().to_str().is_none() {
            debug!("Matching {} despite a non UTF-8 name", entry.path().display());
        }

        if is_regular_file(&entry) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Symlinks count when their target is a regular file. A dangling link is
/// skipped rather than failing the listing.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if !file_type.is_symlink() {
        return file_type.is_file();
    }
    match fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(err) => {
            debug!("Skipping {}: {err}", entry.path().display());
            false
        }
    }
}
