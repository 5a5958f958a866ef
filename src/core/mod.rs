//! Core domain types

pub mod feedback;
pub mod history;
pub mod word;

pub use feedback::{Feedback, FeedbackSymbol};
pub use history::HistoryEntry;
pub use word::{WORD_LENGTH, Word, WordError};
