//! SisVet Business Analysis Report Generator
//!
//! Produces a single self-contained HTML document with the technical,
//! competitive and commercial analysis of the SisVet veterinary management
//! product. All figures come from static data; the only runtime input is the
//! generation timestamp.

pub mod data;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
pub mod validator;

pub use data::{analysis_data, AnalysisData};
pub use error::{ReportError, Result};
pub use models::{GenerationResult, GenerationSummary, RenderedReport};
pub use report::render_report;

use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Directory the report file is written into.
    pub output_dir: PathBuf,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Validate the shipped data and render it, without touching the filesystem.
pub fn render_analysis(generated_at: DateTime<Local>) -> Result<RenderedReport> {
    // 1. Load data
    let data = analysis_data();

    // 2. Validate
    validator::validate_data(&data)?;
    tracing::debug!(
        competitors = data.competitors.len(),
        criteria = data.business.feature_matrix.criteria.len(),
        "report data validated"
    );

    // 3. Render
    let report = report::render_report(&data, generated_at)?;
    tracing::debug!(characters = report.char_count(), "report rendered");

    Ok(report)
}

/// Main entry point: render the report and write it to disk.
pub fn generate_analysis(options: &GenerationOptions, generated_at: DateTime<Local>) -> Result<GenerationResult> {
    let report = render_analysis(generated_at)?;
    let output_path = output::write_report(&report, &options.output_dir)?;
    let summary = summarize(&analysis_data(), &report);

    Ok(GenerationResult {
        output_path,
        report,
        summary,
    })
}

fn summarize(data: &AnalysisData<'_>, report: &RenderedReport) -> GenerationSummary {
    GenerationSummary {
        competitors: data.competitors.len(),
        charts: report::CHART_COUNT,
        characters: report.char_count(),
        contents: report::contents_summary(data),
    }
}
