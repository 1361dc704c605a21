//! Report output

pub mod writer;

pub use writer::{report_file_name, write_report, REPORT_PREFIX};
