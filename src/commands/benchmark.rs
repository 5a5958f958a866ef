//! Benchmark command
//!
//! Solves many targets with the reference evaluator and aggregates the
//! results. Games are independent and share only the read-only word lists,
//! so they fan out across a thread pool.

use crate::core::Word;
use crate::solver::{Heuristic, ReferenceEvaluator, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick random benchmark targets from the solutions list
#[must_use]
pub fn sample_targets(solutions: &[Word], count: usize) -> Vec<Word> {
    use rand::seq::IndexedRandom;

    solutions
        .choose_multiple(&mut rand::rng(), count.min(solutions.len()))
        .cloned()
        .collect()
}

/// Run the benchmark on a set of target words
///
/// # Errors
///
/// Returns an error if the solver's word list is empty.
pub fn run_benchmark<H: Heuristic + Sync>(
    solver: &Solver<'_, H>,
    targets: &[Word],
) -> Result<BenchmarkResult, String> {
    let start = Instant::now();

    let bar = ProgressBar::new(targets.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} words") {
        bar.set_style(style);
    }

    let games: Vec<(usize, bool)> = targets
        .par_iter()
        .map(|target| {
            let mut evaluator = ReferenceEvaluator::new(target.clone());
            let outcome = solver.solve(&mut evaluator, None)?;
            bar.inc(1);
            Ok::<_, String>((outcome.history.len(), outcome.won))
        })
        .collect::<Result<_, _>>()?;

    bar.finish_and_clear();

    let duration = start.elapsed();
    let total_words = games.len();
    let wins = games.iter().filter(|&&(_, won)| won).count();
    let total_guesses: usize = games.iter().map(|&(guesses, _)| guesses).sum();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &(guesses, _) in &games {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    Ok(BenchmarkResult {
        total_words,
        wins,
        win_rate: if total_words == 0 {
            0.0
        } else {
            wins as f64 / total_words as f64
        },
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: games.iter().map(|&(g, _)| g).min().unwrap_or(0),
        max_guesses: games.iter().map(|&(g, _)| g).max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    })
}
