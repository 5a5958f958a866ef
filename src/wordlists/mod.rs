//! Word lists
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT, WORDS, WORDS_COUNT};
