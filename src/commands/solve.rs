//! Full-search command
//!
//! Runs the whole pipeline: enumerate pangram combinations, score every
//! honeycomb, and return the ranked results with a run summary.

use crate::core::{PuzzleRules, Word};
use crate::search::{ScoreResult, enumerate_combinations, score_all};
use std::time::{Duration, Instant};

/// Summary statistics for one search run
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub corpus_size: usize,
    pub combination_count: usize,
    pub honeycombs_scored: usize,
    pub duration: Duration,
}

/// Result of a full search: ranked scores plus the run summary
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub summary: SearchSummary,
    pub scores: ScoreResult,
}

/// Run the full honeycomb search over a loaded corpus
///
/// # Errors
///
/// Returns an error if:
/// - the corpus is empty after rule filtering
/// - no combination can be enumerated (with `require_pangram`, a corpus
///   with zero pangrams) — the empty-result condition, distinct from a
///   legitimate low score
pub fn run_search(corpus: &[Word], rules: &PuzzleRules) -> Result<SearchResult, String> {
    if corpus.is_empty() {
        return Err("Word list is empty after filtering".to_string());
    }

    let combinations = enumerate_combinations(corpus, rules);
    if combinations.is_empty() {
        return Err(
            "No 7-letter combinations found: the corpus contains no pangram".to_string(),
        );
    }

    let start = Instant::now();
    let scores = score_all(corpus, &combinations);
    let duration = start.elapsed();

    Ok(SearchResult {
        summary: SearchSummary {
            corpus_size: corpus.len(),
            combination_count: combinations.len(),
            honeycombs_scored: scores.len(),
            duration,
        },
        scores,
    })
}
