//! Data models for the analysis report

pub mod product;
pub mod competitor;
pub mod business;
pub mod report;

pub use product::*;
pub use competitor::*;
pub use business::*;
pub use report::*;
