//! Guess history
//!
//! The solve loop owns the history and only ever appends to it; constraint
//! state is recomputed from the full history each round.

use crate::core::{Feedback, Word};

/// A single attempted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub word: Word,
    pub feedback: Feedback,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Whether this entry ended the game
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.is_win()
    }
}
