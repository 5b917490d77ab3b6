//! Build summary types.

mod build_summary;

pub use build_summary::BuildSummary;
