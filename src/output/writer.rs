//! Writing the rendered document to disk

use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::models::RenderedReport;

pub const REPORT_PREFIX: &str = "ANALISIS_COMPLETO_SISVET";

/// `ANALISIS_COMPLETO_SISVET_<YYYYMMDD>_<HHMMSS>.html`, local time of generation.
pub fn report_file_name<Tz: TimeZone>(generated_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.html", REPORT_PREFIX, generated_at.format("%Y%m%d_%H%M%S"))
}

/// Write the document into `output_dir`, creating the directory if needed.
/// An existing file with the same name is overwritten.
pub fn write_report(report: &RenderedReport, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(report_file_name(&report.generated_at));
    tracing::debug!(path = %path.display(), bytes = report.html.len(), "writing report");

    fs::write(&path, &report.html).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
