// src/core/section.rs
use crate::models::ReadlistSection;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Prefix of a top-level section heading.
pub const HEADING_MARKER: &str = "## ";
/// Horizontal rule token; lines containing it are dropped when enabled.
pub const RULE_TOKEN: &str = "---";
/// Empty list bullet left in a note template.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRules {
    /// The section starts at the first heading whose text begins with this.
    pub heading: String,
    pub drop_rule_lines: bool,
}

impl Default for SectionRules {
    fn default() -> Self {
        Self {
            heading: String::from("Readlist"),
            drop_rule_lines: true,
        }
    }
}

impl SectionRules {
    fn keeps(&self, line: &str) -> bool {
        if self.drop_rule_lines && line.contains(RULE_TOKEN) {
            return false;
        }
        let trimmed = line.trim();
        !trimmed.is_empty() && trimmed != PLACEHOLDER
    }
}

/// Collects the lines of the designated section.
///
/// Everything before the section heading is ignored and the next `## `
/// heading ends it. Blank lines and lone `-` bullets are dropped. A note
/// without the section yields an empty result.
///
/// # Errors
///
/// Returns an error if reading a line fails, including invalid UTF-8.
#[inline]
pub fn extract_section<R: BufRead>(reader: R, rules: &SectionRules) -> Result<ReadlistSection> {
    let mut section = ReadlistSection::new();
    let mut inside = false;

    for line in reader.lines() {
        let line = line.context("Failed to read line")?;

        if let Some(title) = line.strip_prefix(HEADING_MARKER) {
            if inside {
                break;
            }
            inside = title.starts_with(&rules.heading);
            continue;
        }

        if inside && rules.keeps(&line) {
            section.lines.push(line);
        }
    }

    Ok(section)
}

/// Opens `path` and extracts its section.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
#[inline]
pub fn read_section(path: &Path, rules: &SectionRules) -> Result<ReadlistSection> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open source file: {}", path.display()))?;
    extract_section(BufReader::new(file), rules)
        .with_context(|| format!("Failed to read source file: {}", path.display()))
}
