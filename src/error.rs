//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid report data: {0}")]
    Validation(String),

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
