// src/core/appender.rs
use crate::config::HeaderConfig;
use crate::core::month_file::make_month_file;
use crate::core::section::{SectionRules, read_section};
use crate::models::{SourceFile, VisitedMonths};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appended {
    /// Nothing to append; the digest was left untouched.
    Empty,
    Written {
        lines: usize,
        /// The digest file was created by this call.
        created: bool,
    },
}

/// Appends the Readlist section of `source` to the digest at `dest`.
///
/// The digest is created with its header the first time its month is seen
/// in `visited`. A note with an empty section causes no write at all.
///
/// # Arguments
///
/// * `source` - The note to read
/// * `dest` - The month digest to append to
/// * `visited` - Months already initialised during this run
/// * `rules` - Section selection and filtering rules
/// * `header` - Front matter used when the digest is created
/// * `now` - The current instant, used for the header timestamp
///
/// # Errors
///
/// This function may return an error if:
/// * The note cannot be opened or read
/// * The digest cannot be created, opened or written
#[inline]
pub fn append_readlist(
    source: &SourceFile,
    dest: &Path,
    visited: &mut VisitedMonths,
    rules: &SectionRules,
    header: &HeaderConfig,
    now: DateTime<Utc>,
) -> Result<Appended> {
    let section = read_section(source.path(), rules)?;
    if section.is_empty() {
        debug!("No readlist entries in {}", source.path().display());
        return Ok(Appended::Empty);
    }

    let month = source.month();
    let created = !visited.contains(month);
    if created {
        println!(
            "Need to create new file: {}",
            dest.file_name().unwrap_or_default().to_string_lossy()
        );
        make_month_file(dest, month, header, now)?;
        visited.insert(month.clone());
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(dest)
        .with_context(|| format!("Failed to open digest file: {}", dest.display()))?;
    file.write_all(section.render(source.date()).as_bytes())
        .with_context(|| format!("Failed to append to digest file: {}", dest.display()))?;

    println!("Src: {}\n  Total {} lines", source.file_name(), section.len());
    Ok(Appended::Written {
        lines: section.len(),
        created,
    })
}
