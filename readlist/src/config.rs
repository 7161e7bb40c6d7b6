// src/config.rs
use anyhow::{Context as _, Result};
use chrono::FixedOffset;
use clap::ValueEnum;
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Order in which listed notes are fed to the digests. Decides how entries of
/// the same month are ordered inside their digest file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IterationOrder {
    Forward,
    #[default]
    Reverse,
}

impl IterationOrder {
    #[inline]
    #[must_use]
    pub fn arrange<'a>(self, files: &'a [PathBuf]) -> Vec<&'a PathBuf> {
        match self {
            Self::Forward => files.iter().collect(),
            Self::Reverse => files.iter().rev().collect(),
        }
    }
}

/// What to do when a single note cannot be transferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    #[default]
    Abort,
    Continue,
}

/// Front matter written at the top of each new digest file.
///
/// `title`, `description` and `disclaimer` accept the placeholders `{month}`,
/// `{year}`, `{mon}` and `{period}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub title: String,
    pub description: Option<String>,
    pub disclaimer: Option<String>,
    pub draft: bool,
    /// Offset appended to the `date` field, e.g. `+08:00`.
    pub utc_offset: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: String::from("ReadList - {month}"),
            description: Some(String::from("阿树 {period}的阅读记录，谨供参考")),
            disclaimer: Some(String::from(
                "本文是阿树 {period}的阅读记录，仅供参考，不对真实性和有效性作任何保障。",
            )),
            draft: false,
            utc_offset: String::from("+08:00"),
        }
    }
}

impl HeaderConfig {
    /// Title, date and draft flag only.
    #[inline]
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            description: None,
            disclaimer: None,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns an error if `utc_offset` is not of the form `+HH:MM`.
    #[inline]
    pub fn offset(&self) -> Result<FixedOffset> {
        self.utc_offset
            .parse::<FixedOffset>()
            .with_context(|| format!("Invalid UTC offset: {}", self.utc_offset))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub order: IterationOrder,
    pub on_error: ErrorPolicy,
    /// Glob matched against file names in the source directory.
    pub include: String,
    /// Heading text that opens the extracted section.
    pub section: String,
    /// Drop section lines containing `---`.
    pub drop_rule_lines: bool,
    pub header: HeaderConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            order: IterationOrder::default(),
            on_error: ErrorPolicy::default(),
            include: String::from("*.md"),
            section: String::from("Readlist"),
            drop_rule_lines: true,
            header: HeaderConfig::default(),
        }
    }
}

impl RunConfig {
    /// Reads a run configuration from a TOML file. Missing keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not valid TOML or contains unknown keys
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// # Errors
    ///
    /// Returns an error if `include` is not a valid glob.
    #[inline]
    pub fn include_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.include)
            .with_context(|| format!("Invalid include pattern: {}", self.include))
    }
}
