// src/models/source_file.rs
use crate::models::MonthKey;
use std::path::{Path, PathBuf};

/// A daily note together with the `YYYYMMDD` token found in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    date: String,
    month: MonthKey,
}

impl SourceFile {
    /// Builds a source file from a path and its date token. Returns `None`
    /// if the token is too short to carry a month.
    #[inline]
    #[must_use]
    pub fn new(path: PathBuf, date: &str) -> Option<Self> {
        let month = MonthKey::from_date(date)?;
        Some(Self {
            path,
            date: date.to_owned(),
            month,
        })
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> &MonthKey {
        &self.month
    }

    #[inline]
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
