//! Target solving command
//!
//! Solves a specific known target word with the reference evaluator and
//! records the path taken.

use crate::core::{Feedback, Word};
use crate::solver::{Heuristic, ReferenceEvaluator, Solver};

/// Result of solving a target word
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution path
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub confidence: f64,
}

/// Solve a specific target word using the given solver
///
/// # Errors
///
/// Returns an error if the target word is invalid or the word list is empty.
pub fn solve_word<H: Heuristic>(target: &str, solver: &Solver<H>) -> Result<SolveResult, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut evaluator = ReferenceEvaluator::new(target_word.clone());
    let outcome = solver.solve(&mut evaluator, None)?;

    let steps = outcome
        .history
        .iter()
        .enumerate()
        .map(|(idx, entry)| GuessStep {
            word: entry.word.text().to_string(),
            feedback: entry.feedback,
            candidates_before: solver.candidates(&outcome.history[..idx]).len(),
            candidates_after: solver.candidates(&outcome.history[..=idx]).len(),
            confidence: solver.snapshot(&outcome.history[..=idx]).confidence,
        })
        .collect();

    Ok(SolveResult {
        target: target_word.text().to_string(),
        success: outcome.won,
        steps,
    })
}
