//! Search pipeline
//!
//! Pangram-pruned enumeration of candidate combinations, batch scoring of
//! every honeycomb, and ranking queries over the results.

pub mod pangram;
mod ranker;
pub mod scorer;

pub use pangram::enumerate_combinations;
pub use scorer::{HoneycombScore, ScoreResult, score_all, score_combination};
