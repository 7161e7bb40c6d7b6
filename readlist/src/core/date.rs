// src/core/date.rs
use crate::models::SourceFile;
use anyhow::{Context as _, Result};
use regex::Regex;
use std::path::PathBuf;

/// Eight consecutive ASCII digits. `\d` would also accept non-ASCII digits.
const DATE_TOKEN_PATTERN: &str = "[0-9]{8}";

/// Finds the `YYYYMMDD` token in note file names.
#[derive(Debug, Clone)]
pub struct DateExtractor {
    pattern: Regex,
}

impl DateExtractor {
    /// # Errors
    ///
    /// Returns an error if the date token pattern fails to compile.
    #[inline]
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(DATE_TOKEN_PATTERN)
            .with_context(|| format!("Failed to compile date pattern: {DATE_TOKEN_PATTERN}"))?;
        Ok(Self { pattern })
    }

    /// Returns the first run of eight digits in `name`. The digits are not
    /// checked against the calendar.
    #[inline]
    #[must_use]
    pub fn extract<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.pattern.find(name).map(|found| found.as_str())
    }

    /// Looks for the token in the file name only, so digits in parent
    /// directories never match.
    #[inline]
    #[must_use]
    pub fn source_file(&self, path: PathBuf) -> Option<SourceFile> {
        let name = path.file_name()?.to_str()?;
        let date = self.extract(name)?.to_owned();
        SourceFile::new(path, &date)
    }
}
