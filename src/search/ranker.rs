//! Ranking queries over scored honeycombs
//!
//! Pure queries over a [`ScoreResult`]; nothing here mutates the scores.
//! The extreme queries return every tied entry rather than picking one
//! arbitrarily.

use super::scorer::{HoneycombScore, ScoreResult};

impl ScoreResult {
    /// All honeycombs achieving the maximum score
    ///
    /// Returns an empty slice when no honeycombs were scored.
    #[must_use]
    pub fn best(&self) -> &[HoneycombScore] {
        let Some(first) = self.entries().first() else {
            return &[];
        };
        let tied = self
            .entries()
            .iter()
            .take_while(|e| e.score == first.score)
            .count();
        &self.entries()[..tied]
    }

    /// All honeycombs achieving the minimum score
    ///
    /// Returns an empty slice when no honeycombs were scored.
    #[must_use]
    pub fn worst(&self) -> &[HoneycombScore] {
        let Some(last) = self.entries().last() else {
            return &[];
        };
        let tied = self
            .entries()
            .iter()
            .rev()
            .take_while(|e| e.score == last.score)
            .count();
        &self.entries()[self.len() - tied..]
    }

    /// The top `k` honeycombs, best first
    #[must_use]
    pub fn top(&self, k: usize) -> &[HoneycombScore] {
        &self.entries()[..k.min(self.len())]
    }

    /// The bottom `k` honeycombs, worst first
    #[must_use]
    pub fn bottom(&self, k: usize) -> Vec<&HoneycombScore> {
        self.entries().iter().rev().take(k).collect()
    }
}
