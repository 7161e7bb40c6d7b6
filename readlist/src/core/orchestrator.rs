// src/core/orchestrator.rs
use crate::config::{ErrorPolicy, RunConfig};
use crate::core::appender::{Appended, append_readlist};
use crate::core::date::DateExtractor;
use crate::core::lister::list_markdown_files;
use crate::core::section::SectionRules;
use crate::models::{FileOutcome, Outcome, RunReport, VisitedMonths};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Routes each note into its month digest under `dest_dir`.
///
/// Notes are visited in `config.order`. Names without a date token are
/// skipped. The set of initialised months lives only for this call, so every
/// digest touched by the run gets exactly one header.
///
/// # Errors
///
/// Under [`ErrorPolicy::Abort`] the first failing note ends the run with its
/// error. Under [`ErrorPolicy::Continue`] failures are logged and recorded
/// in the report instead. An invalid header offset fails either way.
#[inline]
pub fn transfer_readlists(
    files: &[PathBuf],
    dest_dir: &Path,
    config: &RunConfig,
    now: DateTime<Utc>,
) -> Result<RunReport> {
    let extractor = DateExtractor::new()?;
    config.header.offset()?;
    let rules = SectionRules {
        heading: config.section.clone(),
        drop_rule_lines: config.drop_rule_lines,
    };

    let mut visited = VisitedMonths::new();
    let mut report = RunReport::new(files.len());

    for path in config.order.arrange(files) {
        let Some(source) = extractor.source_file(path.clone()) else {
            debug!("Skipping {}: no date in file name", path.display());
            report.skipped.push(path.clone());
            continue;
        };

        let dest = dest_dir.join(source.month().file_name());
        let outcome = match append_readlist(
            &source,
            &dest,
            &mut visited,
            &rules,
            &config.header,
            now,
        ) {
            Ok(Appended::Empty) => Outcome::Empty,
            Ok(Appended::Written { lines, created }) => {
                if created {
                    report.created_months.push(source.month().clone());
                }
                Outcome::Written { lines }
            }
            Err(err) => match config.on_error {
                ErrorPolicy::Abort => {
                    return Err(err.context(format!("Failed to transfer {}", path.display())));
                }
                ErrorPolicy::Continue => {
                    warn!("Failed to transfer {}: {err:#}", path.display());
                    Outcome::Failed {
                        reason: format!("{err:#}"),
                    }
                }
            },
        };

        report.outcomes.push(FileOutcome {
            path: path.clone(),
            date: source.date().to_owned(),
            outcome,
        });
    }

    Ok(report)
}

/// Lists the notes in `source_dir` and transfers them into `output_dir`,
/// creating the output directory if needed.
///
/// # Errors
///
/// This function may return an error if:
/// * The source directory cannot be read
/// * The include pattern is invalid
/// * The output directory cannot be created
/// * A note fails under [`ErrorPolicy::Abort`]
#[inline]
pub fn run_transfer(
    source_dir: &Path,
    output_dir: &Path,
    config: &RunConfig,
    now: DateTime<Utc>,
) -> Result<RunReport> {
    let files = list_markdown_files(source_dir, &config.include_pattern()?)?;
    println!("Total {} files", files.len());

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    transfer_readlists(&files, output_dir, config, now)
}
