//! Formatting utilities for terminal output

use crate::core::Honeycomb;

/// Format a honeycomb as uppercase center plus the outer six letters
///
/// # Examples
/// ```
/// use honeycomb_solver::core::{Honeycomb, LetterSet};
/// use honeycomb_solver::output::formatters::format_honeycomb;
///
/// let comb = Honeycomb::new(LetterSet::from_word("gameplay"), b'g').unwrap();
/// assert_eq!(format_honeycomb(&comb), "[G] a e l m p y");
/// ```
#[must_use]
pub fn format_honeycomb(honeycomb: &Honeycomb) -> String {
    let outer: Vec<String> = honeycomb
        .outer_letters()
        .map(|l| (l as char).to_string())
        .collect();
    format!(
        "[{}] {}",
        honeycomb.center().to_ascii_uppercase() as char,
        outer.join(" ")
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score as a bar relative to the best score of the run
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score.max(1)), width)
}
