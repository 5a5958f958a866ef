//! Solve loop and suggestion engine
//!
//! Ties the accumulator, scorer and ranker together: each round it suggests
//! the top-ranked word, asks the evaluator for feedback, appends the result
//! to the history and reports progress, until the word is found or the
//! guess budget runs out.

use super::constraints::ConstraintState;
use super::distribution::DistributionStats;
use super::evaluator::Evaluator;
use super::ranker::{Heuristic, rank_words};
use crate::core::{HistoryEntry, WORD_LENGTH, Word};

/// Guess budget per game
pub const MAX_ATTEMPTS: usize = 6;

/// Per-round snapshot for progress display
///
/// Value snapshot, recomputed from the history after each round; read-only
/// once produced.
#[derive(Debug, Clone)]
pub struct Progress {
    /// Number of attempts made so far
    pub attempt: usize,
    /// Search confidence heuristic in [0, 1]
    pub confidence: f64,
    /// Confirmed letter per position
    pub matched: [Option<u8>; WORD_LENGTH],
    /// Candidate words still consistent with all feedback
    pub remaining_words: Vec<Word>,
    /// Undetermined letters across the remaining candidates, sorted
    pub remaining_letters: Vec<u8>,
    /// The guess history so far
    pub history: Vec<HistoryEntry>,
}

/// A suggested next guess plus the full diagnostic ranking
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    /// The top-ranked word
    pub word: &'a Word,
    /// Every legal guess with its score, best first
    pub ranked: Vec<(&'a Word, f64)>,
}

/// Final result of a solve run
///
/// Running out of attempts is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub history: Vec<HistoryEntry>,
    pub won: bool,
}

/// Suggestion engine over a fixed pair of word lists
///
/// `words` is every legal guess; `solutions` is the (possibly smaller) set
/// of plausible answers used for candidate filtering and letter statistics.
/// Both lists are borrowed read-only, so independent games can share them.
pub struct Solver<'a, H: Heuristic> {
    heuristic: H,
    words: &'a [Word],
    solutions: &'a [Word],
}

impl<'a, H: Heuristic> Solver<'a, H> {
    /// Create a solver whose guess list doubles as the solutions list
    pub const fn new(heuristic: H, words: &'a [Word]) -> Self {
        Self {
            heuristic,
            words,
            solutions: words,
        }
    }

    /// Create a solver with a separate solutions list biasing the statistics
    pub const fn with_solutions(heuristic: H, words: &'a [Word], solutions: &'a [Word]) -> Self {
        Self {
            heuristic,
            words,
            solutions,
        }
    }

    /// Candidate solutions still consistent with the history
    #[must_use]
    pub fn candidates(&self, history: &[HistoryEntry]) -> Vec<&'a Word> {
        ConstraintState::from_history(history).filter(self.solutions)
    }

    /// Suggest the next guess for the given history
    ///
    /// Statistics come from the candidate set (solutions-biased); ranking
    /// runs over the full guess list. When feedback was inconsistent and no
    /// candidate remains, the statistics are empty and ranking degrades to
    /// word-list order instead of failing.
    ///
    /// Returns `None` only when the guess list is empty.
    #[must_use]
    pub fn suggest(&self, history: &[HistoryEntry]) -> Option<Suggestion<'a>> {
        let constraints = ConstraintState::from_history(history);
        let candidates = constraints.filter(self.solutions);
        let undetermined = constraints.undetermined_letters(&candidates);

        let mode = constraints.score_mode(candidates.len(), undetermined.len(), history.len());
        let stats = DistributionStats::compute(&candidates, constraints.confirmed(), mode);

        let ranked = rank_words(self.words, &stats, &self.heuristic);
        let word = ranked.first().map(|&(word, _)| word)?;

        Some(Suggestion { word, ranked })
    }

    /// Build a progress snapshot for the given history
    #[must_use]
    pub fn snapshot(&self, history: &[HistoryEntry]) -> Progress {
        let constraints = ConstraintState::from_history(history);
        let candidates = constraints.filter(self.solutions);
        let remaining_letters = constraints.undetermined_letters(&candidates);

        Progress {
            attempt: history.len(),
            confidence: constraints.confidence(),
            matched: *constraints.confirmed(),
            remaining_words: candidates.into_iter().cloned().collect(),
            remaining_letters,
            history: history.to_vec(),
        }
    }

    /// Run the solve loop for up to [`MAX_ATTEMPTS`] rounds
    ///
    /// Each round suggests a word, obtains feedback from the evaluator,
    /// appends the entry and reports a snapshot to the renderer if one is
    /// configured. Stops early on winning feedback.
    ///
    /// # Errors
    /// Fails fast on an empty guess list, and propagates evaluator errors.
    pub fn solve(
        &self,
        evaluator: &mut dyn Evaluator,
        mut renderer: Option<&mut dyn FnMut(&Progress)>,
    ) -> Result<Outcome, String> {
        if self.words.is_empty() {
            return Err("guess word list must not be empty".to_string());
        }

        let mut history: Vec<HistoryEntry> = Vec::with_capacity(MAX_ATTEMPTS);

        for _ in 0..MAX_ATTEMPTS {
            let suggestion = self
                .suggest(&history)
                .ok_or_else(|| "guess word list must not be empty".to_string())?;

            let feedback = evaluator.evaluate(suggestion.word)?;
            history.push(HistoryEntry::new(suggestion.word.clone(), feedback));

            if let Some(render) = renderer.as_mut() {
                render(&self.snapshot(&history));
            }

            if feedback.is_win() {
                return Ok(Outcome {
                    history,
                    won: true,
                });
            }
        }

        Ok(Outcome {
            history,
            won: false,
        })
    }
}
