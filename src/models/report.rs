//! Rendered report and generation results

use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub html: String,
    pub generated_at: DateTime<Local>,
}

impl RenderedReport {
    /// Document size in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.html.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output_path: PathBuf,
    pub report: RenderedReport,
    pub summary: GenerationSummary,
}

#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub competitors: usize,
    pub charts: usize,
    pub characters: usize,
    /// Human-readable list of what the document contains.
    pub contents: Vec<String>,
}
