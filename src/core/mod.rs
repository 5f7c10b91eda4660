//! Core domain types for the honeycomb puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod honeycomb;
mod letter_set;
mod rules;
mod word;

pub use honeycomb::{Honeycomb, HoneycombError};
pub use letter_set::LetterSet;
pub use rules::PuzzleRules;
pub use word::{PANGRAM_BONUS, Word, WordError};
