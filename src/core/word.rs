//! Puzzle word representation
//!
//! A Word stores a normalized dictionary word along with its distinct-letter
//! set and precomputed point value.

use super::letter_set::LetterSet;
use super::rules::PuzzleRules;
use std::fmt;

/// Bonus points awarded for a pangram (a word using 7 distinct letters)
pub const PANGRAM_BONUS: u32 = 7;

/// A validated puzzle word with its letter mask and point value
///
/// Words are normalized to lowercase at construction and never mutated.
/// Point value: 1 point for a 4-letter word, otherwise one point per letter,
/// plus [`PANGRAM_BONUS`] when the word uses exactly 7 distinct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: LetterSet,
    points: u32,
}

/// Error type for words rejected by the puzzle rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooShort { length: usize, min: usize },
    NonAlphabetic,
    BannedLetter(char),
    TooManyDistinctLetters(u32),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty"),
            Self::TooShort { length, min } => {
                write!(f, "Word must be at least {min} letters, got {length}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
            Self::BannedLetter(letter) => {
                write!(f, "Word contains the banned letter '{letter}'")
            }
            Self::TooManyDistinctLetters(count) => {
                write!(f, "Word uses {count} distinct letters, maximum is 7")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, validating it against the puzzle rules
    ///
    /// # Errors
    /// Returns `WordError` if the word:
    /// - is empty or shorter than `rules.min_word_length`
    /// - contains non-ASCII or non-alphabetic characters
    /// - contains the banned letter
    /// - uses more than 7 distinct letters
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::{PuzzleRules, Word};
    ///
    /// let rules = PuzzleRules::standard();
    /// let word = Word::new("amalgam", &rules).unwrap();
    /// assert_eq!(word.points(), 7);
    ///
    /// assert!(Word::new("gem", &rules).is_err()); // too short
    /// assert!(Word::new("sample", &rules).is_err()); // banned 's'
    /// ```
    pub fn new(text: impl Into<String>, rules: &PuzzleRules) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic);
        }

        if text.len() < rules.min_word_length {
            return Err(WordError::TooShort {
                length: text.len(),
                min: rules.min_word_length,
            });
        }

        if text.bytes().any(|b| b == rules.banned_letter) {
            return Err(WordError::BannedLetter(rules.banned_letter as char));
        }

        let letters = LetterSet::from_word(&text);
        if letters.len() > 7 {
            return Err(WordError::TooManyDistinctLetters(letters.len()));
        }

        let base = if text.len() == 4 { 1 } else { text.len() as u32 };
        let bonus = if letters.len() == 7 { PANGRAM_BONUS } else { 0 };

        Ok(Self {
            text,
            letters,
            points: base + bonus,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's distinct-letter set
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Get the word's point value
    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word is empty (never true for a validated word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the word uses exactly 7 distinct letters
    #[inline]
    #[must_use]
    pub const fn is_pangram(&self) -> bool {
        self.letters.len() == 7
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PuzzleRules {
        PuzzleRules::standard()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("game", &rules()).unwrap();
        assert_eq!(word.text(), "game");
        assert_eq!(word.len(), 4);
        assert_eq!(word.letters().len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("GAME", &rules()).unwrap();
        assert_eq!(word.text(), "game");

        let word2 = Word::new("GaMe", &rules()).unwrap();
        assert_eq!(word2.text(), "game");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  game \n", &rules()).unwrap();
        assert_eq!(word.text(), "game");
    }

    #[test]
    fn word_too_short_rejected() {
        assert!(matches!(
            Word::new("cat", &rules()),
            Err(WordError::TooShort { length: 3, min: 4 })
        ));
        assert!(matches!(Word::new("", &rules()), Err(WordError::Empty)));
    }

    #[test]
    fn word_non_alphabetic_rejected() {
        assert!(Word::new("gam3", &rules()).is_err()); // number
        assert!(Word::new("twenty-one", &rules()).is_err()); // hyphen
        assert!(Word::new("ga me", &rules()).is_err()); // inner space
    }

    #[test]
    fn word_with_banned_letter_rejected() {
        assert!(matches!(
            Word::new("sample", &rules()),
            Err(WordError::BannedLetter('s'))
        ));
        assert!(matches!(
            Word::new("glass", &rules()),
            Err(WordError::BannedLetter('s'))
        ));
    }

    #[test]
    fn word_with_too_many_distinct_letters_rejected() {
        // e,d,u,c,a,t,i,o,n = 9 distinct
        assert!(matches!(
            Word::new("education", &rules()),
            Err(WordError::TooManyDistinctLetters(9))
        ));
    }

    #[test]
    fn four_letter_word_scores_one() {
        let word = Word::new("game", &rules()).unwrap();
        assert_eq!(word.points(), 1);
    }

    #[test]
    fn longer_word_scores_its_length() {
        let word = Word::new("gleam", &rules()).unwrap();
        assert_eq!(word.points(), 5);

        let word = Word::new("member", &rules()).unwrap();
        assert_eq!(word.points(), 6);
    }

    #[test]
    fn pangram_gets_bonus() {
        // 8 letters, 7 distinct: 8 + 7 = 15
        let word = Word::new("gameplay", &rules()).unwrap();
        assert!(word.is_pangram());
        assert_eq!(word.points(), 15);

        // 7 letters, 7 distinct: 7 + 7 = 14, the minimum pangram score
        let word = Word::new("mailbox", &rules()).unwrap();
        assert!(word.is_pangram());
        assert_eq!(word.points(), 14);
    }

    #[test]
    fn repeated_letters_do_not_add_distinct_count() {
        // amalgam: 7 letters long but only {a, g, l, m} distinct
        let word = Word::new("amalgam", &rules()).unwrap();
        assert!(!word.is_pangram());
        assert_eq!(word.letters().len(), 4);
        assert_eq!(word.points(), 7);
    }

    #[test]
    fn custom_min_length_applies() {
        let relaxed = PuzzleRules {
            min_word_length: 3,
            ..PuzzleRules::standard()
        };
        let word = Word::new("gem", &relaxed).unwrap();
        // Only exactly-4-letter words get the flat 1 point
        assert_eq!(word.points(), 3);
    }

    #[test]
    fn custom_banned_letter_applies() {
        let no_e = PuzzleRules {
            banned_letter: b'e',
            ..PuzzleRules::standard()
        };
        assert!(Word::new("game", &no_e).is_err());
        assert!(Word::new("glass", &no_e).is_ok());
    }

    #[test]
    fn word_display() {
        let word = Word::new("game", &rules()).unwrap();
        assert_eq!(format!("{word}"), "game");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        let word1 = Word::new("game", &rules()).unwrap();
        let word2 = Word::new("GAME", &rules()).unwrap();
        let word3 = Word::new("gale", &rules()).unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
