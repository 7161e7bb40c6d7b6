// src/core.rs
pub mod appender;
pub mod date;
pub mod lister;
pub mod month_file;
pub mod orchestrator;
pub mod section;
