//! Pangram-based combination enumeration
//!
//! Restricting the search to 7-letter combinations that admit at least one
//! pangram shrinks the candidate space from millions of combinations to the
//! low thousands without losing any valid honeycomb, since the puzzle
//! requires every honeycomb to contain a pangram.

use crate::core::{LetterSet, PuzzleRules, Word};
use rustc_hash::FxHashSet;

/// Enumerate the distinct 7-letter combinations to score
///
/// With `rules.require_pangram` set (the default), returns exactly the
/// deduplicated letter sets of the corpus pangrams. Otherwise falls back to
/// every 7-letter subset of the letters that occur anywhere in the corpus.
///
/// The result is sorted, so enumeration order never depends on corpus order
/// or hash iteration.
#[must_use]
pub fn enumerate_combinations(corpus: &[Word], rules: &PuzzleRules) -> Vec<LetterSet> {
    let mut combinations = if rules.require_pangram {
        pangram_combinations(corpus)
    } else {
        all_seven_subsets(corpus)
    };
    combinations.sort_unstable();
    combinations
}

/// Distinct letter sets of all pangrams in the corpus
///
/// Two pangrams with the same distinct letters (regardless of spelling)
/// collapse to one combination.
fn pangram_combinations(corpus: &[Word]) -> Vec<LetterSet> {
    let unique: FxHashSet<LetterSet> = corpus
        .iter()
        .filter(|word| word.is_pangram())
        .map(Word::letters)
        .collect();
    unique.into_iter().collect()
}

/// Every 7-letter subset of the letters present in the corpus
///
/// Exhaustive fallback for `require_pangram = false`. The subset count is
/// C(n, 7) over the n present letters, at most C(26, 7) = 657,800.
fn all_seven_subsets(corpus: &[Word]) -> Vec<LetterSet> {
    let present: LetterSet = corpus
        .iter()
        .fold(LetterSet::empty(), |acc, word| acc.union(word.letters()));
    let letters: Vec<u8> = present.letters().collect();

    let mut subsets = Vec::new();
    let mut chosen = Vec::with_capacity(7);
    choose(&letters, 0, &mut chosen, &mut subsets);
    subsets
}

fn choose(letters: &[u8], start: usize, chosen: &mut Vec<u8>, out: &mut Vec<LetterSet>) {
    if chosen.len() == 7 {
        out.push(chosen.iter().copied().collect());
        return;
    }
    // Not enough letters left to reach 7
    if letters.len() - start < 7 - chosen.len() {
        return;
    }
    for i in start..letters.len() {
        chosen.push(letters[i]);
        choose(letters, i + 1, chosen, out);
        chosen.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleRules;

    fn corpus(words: &[&str]) -> Vec<Word> {
        let rules = PuzzleRules::standard();
        words
            .iter()
            .map(|w| Word::new(*w, &rules).unwrap())
            .collect()
    }

    #[test]
    fn finds_pangram_combinations() {
        let corpus = corpus(&["gameplay", "mailbox", "game", "gleam"]);
        let combos = enumerate_combinations(&corpus, &PuzzleRules::standard());

        assert_eq!(combos.len(), 2);
        assert!(combos.contains(&LetterSet::from_word("gameplay")));
        assert!(combos.contains(&LetterSet::from_word("mailbox")));
    }

    #[test]
    fn deduplicates_same_letter_set() {
        // Both are pangrams over {a, e, g, l, m, p, y}
        let rules = PuzzleRules::standard();
        let words = vec![
            Word::new("gameplay", &rules).unwrap(),
            Word::new("playgame", &rules).unwrap(),
        ];
        let combos = enumerate_combinations(&words, &rules);

        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0], LetterSet::from_word("gameplay"));
    }

    #[test]
    fn no_pangrams_yields_empty_result() {
        let corpus = corpus(&["game", "gleam", "amalgam"]);
        let combos = enumerate_combinations(&corpus, &PuzzleRules::standard());
        assert!(combos.is_empty());
    }

    #[test]
    fn result_is_sorted_and_deterministic() {
        let forward = corpus(&["gameplay", "mailbox", "network"]);
        let reversed = corpus(&["network", "mailbox", "gameplay"]);

        let rules = PuzzleRules::standard();
        let a = enumerate_combinations(&forward, &rules);
        let b = enumerate_combinations(&reversed, &rules);

        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn exhaustive_mode_enumerates_all_subsets() {
        // Corpus covers 8 distinct letters; C(8, 7) = 8 subsets
        let corpus = corpus(&["gameplay", "bale"]);
        let rules = PuzzleRules {
            require_pangram: false,
            ..PuzzleRules::standard()
        };
        let combos = enumerate_combinations(&corpus, &rules);

        assert_eq!(combos.len(), 8);
        assert!(combos.iter().all(|c| c.len() == 7));
        // The pangram's own letter set is among them
        assert!(combos.contains(&LetterSet::from_word("gameplay")));
    }
}
