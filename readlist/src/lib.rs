// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::{ErrorPolicy, HeaderConfig, IterationOrder, RunConfig};
pub use crate::core::appender::{Appended, append_readlist};
pub use crate::core::date::DateExtractor;
pub use crate::core::lister::list_markdown_files;
pub use crate::core::month_file::{make_month_file, normalize_date, render_header};
pub use crate::core::orchestrator::{run_transfer, transfer_readlists};
pub use crate::core::section::{SectionRules, extract_section, read_section};
pub use models::{MonthKey, Outcome, ReadlistSection, RunReport, SourceFile, VisitedMonths};
