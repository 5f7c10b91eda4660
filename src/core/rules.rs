//! Puzzle rule configuration
//!
//! Captures the knobs the puzzle exposes: the banned letter, the minimum
//! word length, and whether every combination must admit a pangram.

/// Rules governing which words and combinations are admissible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleRules {
    /// Letter that never appears in any word or combination
    pub banned_letter: u8,
    /// Minimum accepted word length
    pub min_word_length: usize,
    /// Whether every scored combination must admit at least one pangram
    pub require_pangram: bool,
}

impl PuzzleRules {
    /// Standard Spelling Bee rules: no 's', words of 4+ letters, every
    /// honeycomb contains a pangram.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            banned_letter: b's',
            min_word_length: 4,
            require_pangram: true,
        }
    }
}

impl Default for PuzzleRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_match_the_puzzle() {
        let rules = PuzzleRules::standard();
        assert_eq!(rules.banned_letter, b's');
        assert_eq!(rules.min_word_length, 4);
        assert!(rules.require_pangram);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(PuzzleRules::default(), PuzzleRules::standard());
    }
}
