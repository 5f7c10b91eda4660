//! Word lists for the honeycomb search
//!
//! Provides the embedded demo word list compiled into the binary, plus
//! file-loading utilities.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
