// src/models/run_report.rs
use crate::models::MonthKey;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The section had content and was appended.
    Written { lines: usize },
    /// No Readlist section, or nothing left after filtering.
    Empty,
    /// The file failed and the run was told to keep going.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub date: String,
    pub outcome: Outcome,
}

#[derive(Debug, Default, Clone)]
pub struct RunReport {
    pub discovered: usize,
    pub outcomes: Vec<FileOutcome>,
    /// Files without a date token in their name.
    pub skipped: Vec<PathBuf>,
    /// Digest files created during the run, in creation order.
    pub created_months: Vec<MonthKey>,
}

impl RunReport {
    #[inline]
    #[must_use]
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn written_files(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|file| matches!(file.outcome, Outcome::Written { .. }))
            .count()
    }

    #[inline]
    #[must_use]
    pub fn written_lines(&self) -> usize {
        self.outcomes
            .iter()
            .map(|file| match file.outcome {
                Outcome::Written { lines } => lines,
                Outcome::Empty | Outcome::Failed { .. } => 0,
            })
            .sum()
    }

    #[inline]
    #[must_use]
    pub fn failures(&self) -> Vec<&FileOutcome> {
        self.outcomes
            .iter()
            .filter(|file| matches!(file.outcome, Outcome::Failed { .. }))
            .collect()
    }
}
