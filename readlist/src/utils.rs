// src/utils.rs
use crate::models::RunReport;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn init_logger(verbose: bool) {
    let default = if verbose { "readlist=debug" } else { "readlist=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn print_summary(report: &RunReport) {
    print!("{}", format_summary(report));
}

/// The closing lines printed after a run.
#[must_use]
pub fn format_summary(report: &RunReport) -> String {
    let mut summary = format!(
        "Wrote {} lines from {} files into {} new digests\n",
        report.written_lines(),
        report.written_files(),
        report.created_months.len()
    );
    if !report.skipped.is_empty() {
        summary.push_str(&format!(
            "Skipped {} files without a date\n",
            report.skipped.len()
        ));
    }
    for failure in report.failures() {
        summary.push_str(&format!("Failed: {}\n", failure.path.display()));
    }
    summary
}
