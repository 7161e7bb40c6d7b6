// src/cli.rs
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{ErrorPolicy, HeaderConfig, IterationOrder, RunConfig};
use crate::core::orchestrator::run_transfer;
use crate::models::RunReport;
use crate::utils::print_summary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the daily notes (only direct children are read)
    pub source_dir: PathBuf,

    /// Directory receiving the monthly digest files
    pub output_dir: PathBuf,

    /// TOML file with run settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Order in which notes are appended to their digest
    #[arg(short, long, value_enum)]
    pub order: Option<IterationOrder>,

    /// Stop at the first failing note, or log it and go on
    #[arg(short = 'e', long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Write only title, date and draft in new digest headers
    #[arg(short, long)]
    pub minimal_header: bool,

    /// Keep section lines containing "---"
    #[arg(short, long)]
    pub keep_rule_lines: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the run configuration: the config file (or defaults) with
    /// command-line overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(on_error) = self.on_error {
            config.on_error = on_error;
        }
        if self.minimal_header {
            let minimal = HeaderConfig::minimal();
            config.header.description = minimal.description;
            config.header.disclaimer = minimal.disclaimer;
        }
        if self.keep_rule_lines {
            config.drop_rule_lines = false;
        }

        Ok(config)
    }
}

/// Runs one aggregation pass from `args.source_dir` into `args.output_dir`.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration is invalid
/// * The source directory cannot be read
/// * A note fails while the error policy is `abort`
pub fn run(args: Args) -> Result<RunReport> {
    let config = args.run_config()?;
    let report = run_transfer(&args.source_dir, &args.output_dir, &config, Utc::now())?;
    print_summary(&report);
    Ok(report)
}
