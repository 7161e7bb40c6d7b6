// src/models.rs
pub mod month_key;
pub mod readlist_section;
pub mod run_report;
pub mod source_file;
pub mod visited_months;

pub use month_key::MonthKey;
pub use readlist_section::ReadlistSection;
pub use run_report::{FileOutcome, Outcome, RunReport};
pub use source_file::SourceFile;
pub use visited_months::VisitedMonths;
