//! Word list loading utilities
//!
//! Provides functions to load and filter word lists from files or the
//! embedded sample list. Lines that fail the puzzle rules (too short,
//! banned letter, non-alphabetic, more than 7 distinct letters) are
//! ordinary filtering, not errors; only an unreadable source is fatal.

use crate::core::{PuzzleRules, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load and filter words from a file
///
/// Returns the deduplicated corpus of words accepted by the rules, in
/// input order. Duplicate lines collapse to one Word so scoring is per
/// canonical word form.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use honeycomb_solver::core::PuzzleRules;
/// use honeycomb_solver::wordlists::loader::load_from_file;
///
/// let rules = PuzzleRules::standard();
/// let corpus = load_from_file("data/sample.txt", &rules).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, rules: &PuzzleRules) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines(), rules))
}

/// Convert a raw string slice (such as the embedded sample) to a corpus
///
/// # Examples
/// ```
/// use honeycomb_solver::core::PuzzleRules;
/// use honeycomb_solver::wordlists::{SAMPLE, loader::words_from_slice};
///
/// let corpus = words_from_slice(SAMPLE, &PuzzleRules::standard());
/// assert!(corpus.len() < SAMPLE.len()); // raw list contains filtered entries
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], rules: &PuzzleRules) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), rules)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, rules: &PuzzleRules) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    lines
        .filter_map(|line| Word::new(line, rules).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
