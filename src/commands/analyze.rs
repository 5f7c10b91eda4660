//! Honeycomb analysis command
//!
//! Scores one specific honeycomb and reports its legal words.

use crate::core::{Honeycomb, LetterSet, Word};

/// One legal word of an analyzed honeycomb
#[derive(Debug, Clone)]
pub struct AnalyzedWord {
    pub text: String,
    pub points: u32,
    pub pangram: bool,
}

/// Result of analyzing a single honeycomb
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub honeycomb: Honeycomb,
    pub score: u32,
    pub words: Vec<AnalyzedWord>,
}

/// Score a user-supplied honeycomb against a loaded corpus
///
/// `letters` is the 7-letter combination (any order, any case) and `center`
/// the required center letter. Legal words are returned highest points
/// first, ties alphabetical.
///
/// # Errors
///
/// Returns an error if:
/// - `letters` contains non-alphabetic characters or does not reduce to
///   exactly 7 distinct letters
/// - `center` is not one of the combination's letters
pub fn analyze_honeycomb(
    letters: &str,
    center: char,
    corpus: &[Word],
) -> Result<AnalysisResult, String> {
    let normalized = letters.trim().to_lowercase();
    if !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(format!("Invalid combination '{letters}': letters only"));
    }

    let combination = LetterSet::from_word(&normalized);
    let center = center.to_ascii_lowercase();
    if !center.is_ascii_lowercase() {
        return Err(format!("Invalid center letter '{center}'"));
    }

    let honeycomb =
        Honeycomb::new(combination, center as u8).map_err(|e| format!("Invalid honeycomb: {e}"))?;

    let mut words: Vec<AnalyzedWord> = corpus
        .iter()
        .filter(|word| honeycomb.admits(word.letters()))
        .map(|word| AnalyzedWord {
            text: word.text().to_string(),
            points: word.points(),
            pangram: word.is_pangram(),
        })
        .collect();
    words.sort_unstable_by(|a, b| b.points.cmp(&a.points).then(a.text.cmp(&b.text)));

    let score = words.iter().map(|w| w.points).sum();

    Ok(AnalysisResult {
        honeycomb,
        score,
        words,
    })
}
