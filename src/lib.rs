//! Honeycomb Solver
//!
//! An exhaustive Spelling Bee honeycomb optimizer. Every 7-letter
//! combination admitting a pangram is scored for each choice of center
//! letter, using 26-bit letter masks so legality is a single bitwise test.
//!
//! # Quick Start
//!
//! ```rust
//! use honeycomb_solver::core::{PuzzleRules, Word};
//! use honeycomb_solver::search::{enumerate_combinations, score_all};
//!
//! let rules = PuzzleRules::standard();
//! let corpus: Vec<Word> = ["game", "amalgam", "gameplay"]
//!     .iter()
//!     .filter_map(|w| Word::new(*w, &rules).ok())
//!     .collect();
//!
//! let combinations = enumerate_combinations(&corpus, &rules);
//! let scores = score_all(&corpus, &combinations);
//! let best = scores.best();
//! assert!(!best.is_empty());
//! ```

// Core domain types
pub mod core;

// Search pipeline: pangram enumeration, scoring, ranking
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
