//! Honeycomb representation
//!
//! A honeycomb is a 7-letter combination plus a designated center letter
//! that every legal word must contain.

use super::letter_set::LetterSet;
use std::fmt;

/// A 7-letter combination with a required center letter
///
/// The ordering (combination first, then center) gives deterministic
/// tie-breaking when honeycombs are sorted by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Honeycomb {
    letters: LetterSet,
    center: u8,
}

/// Error type for invalid honeycombs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoneycombError {
    WrongLetterCount(u32),
    CenterNotInCombination(char),
}

impl fmt::Display for HoneycombError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLetterCount(count) => {
                write!(f, "Combination must have exactly 7 letters, got {count}")
            }
            Self::CenterNotInCombination(letter) => {
                write!(f, "Center letter '{letter}' is not in the combination")
            }
        }
    }
}

impl std::error::Error for HoneycombError {}

impl Honeycomb {
    /// Create a honeycomb from a 7-letter combination and a center letter
    ///
    /// # Errors
    /// Returns `HoneycombError` if the combination does not have exactly 7
    /// letters, or the center letter is not one of them.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::{Honeycomb, LetterSet};
    ///
    /// let combo = LetterSet::from_word("gameplay");
    /// let comb = Honeycomb::new(combo, b'g').unwrap();
    /// assert_eq!(comb.center(), b'g');
    ///
    /// assert!(Honeycomb::new(combo, b'z').is_err());
    /// ```
    pub fn new(letters: LetterSet, center: u8) -> Result<Self, HoneycombError> {
        if letters.len() != 7 {
            return Err(HoneycombError::WrongLetterCount(letters.len()));
        }
        if !letters.contains(center) {
            return Err(HoneycombError::CenterNotInCombination(center as char));
        }
        Ok(Self { letters, center })
    }

    /// The full 7-letter combination, center included
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// The required center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.center
    }

    /// The six letters other than the center, in alphabetical order
    pub fn outer_letters(&self) -> impl Iterator<Item = u8> {
        let center = self.center;
        self.letters.letters().filter(move |&l| l != center)
    }

    /// Whether a word's letter set is legal for this honeycomb: a subset of
    /// the combination that includes the center letter
    #[inline]
    #[must_use]
    pub const fn admits(&self, word_letters: LetterSet) -> bool {
        word_letters.is_subset_of(self.letters) && word_letters.contains(self.center)
    }
}

impl fmt::Display for Honeycomb {
    /// Center letter uppercase, then the outer six: `G|aelmpy`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|", self.center.to_ascii_uppercase() as char)?;
        for letter in self.outer_letters() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo() -> LetterSet {
        LetterSet::from_word("gameplay")
    }

    #[test]
    fn honeycomb_creation_valid() {
        let comb = Honeycomb::new(combo(), b'g').unwrap();
        assert_eq!(comb.center(), b'g');
        assert_eq!(comb.letters(), combo());
    }

    #[test]
    fn honeycomb_rejects_wrong_letter_count() {
        let six = LetterSet::from_word("gleam"); // 5 letters
        assert!(matches!(
            Honeycomb::new(six, b'g'),
            Err(HoneycombError::WrongLetterCount(5))
        ));
    }

    #[test]
    fn honeycomb_rejects_center_outside_combination() {
        assert!(matches!(
            Honeycomb::new(combo(), b'z'),
            Err(HoneycombError::CenterNotInCombination('z'))
        ));
    }

    #[test]
    fn admits_requires_subset_and_center() {
        let comb = Honeycomb::new(combo(), b'g').unwrap();

        // Subset and contains 'g'
        assert!(comb.admits(LetterSet::from_word("gleam")));
        // Subset but missing the center letter
        assert!(!comb.admits(LetterSet::from_word("ample")));
        // Contains 'g' but not a subset ('u' outside)
        assert!(!comb.admits(LetterSet::from_word("plague")));
    }

    #[test]
    fn outer_letters_exclude_center() {
        let comb = Honeycomb::new(combo(), b'g').unwrap();
        let outer: Vec<u8> = comb.outer_letters().collect();
        assert_eq!(outer, vec![b'a', b'e', b'l', b'm', b'p', b'y']);
    }

    #[test]
    fn display_shows_center_first() {
        let comb = Honeycomb::new(combo(), b'g').unwrap();
        assert_eq!(format!("{comb}"), "G|aelmpy");
    }

    #[test]
    fn ordering_is_deterministic() {
        let a = Honeycomb::new(combo(), b'a').unwrap();
        let g = Honeycomb::new(combo(), b'g').unwrap();
        assert!(a < g);
    }
}
