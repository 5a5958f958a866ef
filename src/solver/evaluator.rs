//! Guess evaluation
//!
//! The evaluator is the external "game": given a proposed word it returns
//! the feedback sequence. In production that is a human relaying the real
//! puzzle output; in tests and benchmarks it is a deterministic comparator
//! against a hidden target.

use crate::core::{Feedback, FeedbackSymbol, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// External source of feedback for proposed guesses
///
/// This is the solve loop's only suspension point: an implementation may
/// block on a human operator or an external process.
///
/// Contract for duplicate letters: when a guess repeats a letter more often
/// than the target contains it, exact matches consume target occurrences
/// first, then contained marks consume what remains, and surplus occurrences
/// must report `NoMatch`. The constraint accumulator relies on this.
pub trait Evaluator {
    /// Evaluate a guess, returning its feedback
    ///
    /// # Errors
    /// Returns an error when feedback cannot be obtained, e.g. the operator
    /// aborted the session.
    fn evaluate(&mut self, word: &Word) -> Result<Feedback, String>;
}

/// Deterministic evaluator comparing guesses against a hidden target
#[derive(Debug, Clone)]
pub struct ReferenceEvaluator {
    target: Word,
}

impl ReferenceEvaluator {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    /// Compute feedback for a guess against a known target
    ///
    /// Two passes: exact matches first, each consuming one occurrence of the
    /// target letter, then contained marks from the remaining pool. Surplus
    /// duplicate occurrences fall through to `NoMatch`.
    #[must_use]
    pub fn feedback_for(guess: &Word, target: &Word) -> Feedback {
        let mut symbols = [FeedbackSymbol::NoMatch; WORD_LENGTH];

        let mut available: FxHashMap<u8, u8> = FxHashMap::default();
        for &letter in target.letters() {
            *available.entry(letter).or_insert(0) += 1;
        }

        // Allow: index needed to compare guess[i] with target[i] and set symbols[i]
        #[allow(clippy::needless_range_loop)]
        for idx in 0..WORD_LENGTH {
            if guess.letter_at(idx) == target.letter_at(idx) {
                symbols[idx] = FeedbackSymbol::Match;

                if let Some(count) = available.get_mut(&guess.letter_at(idx)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for idx in 0..WORD_LENGTH {
            if symbols[idx] == FeedbackSymbol::NoMatch {
                let letter = guess.letter_at(idx);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    symbols[idx] = FeedbackSymbol::Contained;
                    *count -= 1;
                }
            }
        }

        Feedback::new(symbols)
    }
}

impl Evaluator for ReferenceEvaluator {
    fn evaluate(&mut self, word: &Word) -> Result<Feedback, String> {
        Ok(Self::feedback_for(word, &self.target))
    }
}
