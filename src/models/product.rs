//! Profile of the product being analysed

use super::BadgeTone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProfile {
    pub name: String,
    pub version: String,
    pub status: String,
    pub line_count: u32,
    pub tech_stack: Vec<TechGroup>,
    pub modules: Vec<String>,
    pub table_count: u32,
    pub completeness_pct: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub quality: Vec<QualityRating>,
}

/// One category of the technology stack (frontend, backend, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechGroup {
    pub key: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRating {
    pub aspect: String,
    pub verdict: String,
    pub tone: BadgeTone,
    pub percent: u8,
}

impl TechGroup {
    pub fn new(key: impl Into<String>, title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl QualityRating {
    pub fn new(aspect: impl Into<String>, verdict: impl Into<String>, tone: BadgeTone, percent: u8) -> Self {
        Self {
            aspect: aspect.into(),
            verdict: verdict.into(),
            tone,
            percent,
        }
    }
}
