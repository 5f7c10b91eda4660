//! Honeycomb scoring
//!
//! Computes the total score of every (combination, center letter) pair.
//! Each combination is scored in a single pass over its legal words,
//! accumulating per-center sums, rather than rescanning the corpus once per
//! center choice.

use crate::core::{Honeycomb, LetterSet, Word};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Score of a single honeycomb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoneycombScore {
    pub honeycomb: Honeycomb,
    /// Sum of points of every legal word containing the center letter
    pub score: u32,
    /// How many legal words contribute to the score
    pub word_count: usize,
}

/// All honeycomb scores for one run, sorted by score descending
///
/// Ties are broken by honeycomb ordering, so the result is deterministic
/// for a given corpus regardless of enumeration or thread scheduling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    entries: Vec<HoneycombScore>,
}

impl ScoreResult {
    /// All entries, best first
    #[must_use]
    pub fn entries(&self) -> &[HoneycombScore] {
        &self.entries
    }

    /// Number of scored honeycombs (7 per combination)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no honeycombs were scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Score every center-letter choice of every combination
///
/// Combinations are independent, so scoring is parallelized across them and
/// the partial results merged with a final deterministic sort.
#[must_use]
pub fn score_all(corpus: &[Word], combinations: &[LetterSet]) -> ScoreResult {
    let mut entries: Vec<HoneycombScore> = combinations
        .par_iter()
        .flat_map_iter(|&combination| score_combination(corpus, combination))
        .collect();

    entries.sort_unstable_by_key(|entry| (Reverse(entry.score), entry.honeycomb));
    ScoreResult { entries }
}

/// Score all 7 center-letter choices of one combination
///
/// The combination must have exactly 7 letters.
///
/// One pass over the corpus: words whose letters are a subset of the
/// combination contribute their points to the sum of every combination
/// letter they contain.
#[must_use]
pub fn score_combination(corpus: &[Word], combination: LetterSet) -> Vec<HoneycombScore> {
    let centers: Vec<u8> = combination.letters().collect();
    debug_assert_eq!(centers.len(), 7);

    let mut sums = [0u32; 7];
    let mut counts = [0usize; 7];

    for word in corpus {
        if !word.letters().is_subset_of(combination) {
            continue;
        }
        for (i, &center) in centers.iter().enumerate() {
            if word.letters().contains(center) {
                sums[i] += word.points();
                counts[i] += 1;
            }
        }
    }

    centers
        .iter()
        .enumerate()
        .map(|(i, &center)| HoneycombScore {
            honeycomb: Honeycomb::new(combination, center)
                .expect("center drawn from the combination"),
            score: sums[i],
            word_count: counts[i],
        })
        .collect()
}
