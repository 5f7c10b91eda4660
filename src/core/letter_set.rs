//! Letter set bitmask
//!
//! A `LetterSet` encodes which letters of `a..=z` appear in a word or
//! combination as a 26-bit mask, making subset and membership tests single
//! bitwise operations.

use std::fmt;

/// Set of distinct ASCII lowercase letters, stored as a 26-bit mask
///
/// Bit `i` is set when letter `b'a' + i` is present. The ordering derives
/// from the mask value, which gives a stable, deterministic sort order for
/// deduplicated combinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Number of letters in the alphabet
    pub const ALPHABET_SIZE: u32 = 26;

    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build the set of distinct letters in a word
    ///
    /// Non-lowercase bytes are ignored; callers validate words before
    /// constructing sets from them.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("amalgam");
    /// assert_eq!(set.len(), 4); // a, g, l, m
    /// assert!(set.contains(b'g'));
    /// assert!(!set.contains(b'z'));
    /// ```
    #[must_use]
    pub fn from_word(text: &str) -> Self {
        let mut set = Self::empty();
        for byte in text.bytes() {
            if byte.is_ascii_lowercase() {
                set.insert(byte);
            }
        }
        set
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Test whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set contains no letters
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Test whether every letter of `self` is in `other`
    ///
    /// This is the legality test for a word against a honeycomb: one AND
    /// and one compare.
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The raw 26-bit mask
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Iterate over the letters of the set in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
