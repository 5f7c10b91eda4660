//! Command implementations

pub mod analyze;
pub mod solve;

pub use analyze::{AnalysisResult, AnalyzedWord, analyze_honeycomb};
pub use solve::{SearchResult, SearchSummary, run_search};
