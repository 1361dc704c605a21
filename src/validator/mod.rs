//! Validation module

pub mod structure;

use crate::data::AnalysisData;
use crate::error::Result;

pub fn validate_data(data: &AnalysisData<'_>) -> Result<()> {
    structure::validate_structure(data)
}
