//! Wordle Assist
//!
//! A Wordle assistant that filters the dictionary against accumulated guess
//! feedback and ranks the next guess by letter-frequency statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_assist::core::Word;
//! use wordle_assist::solver::{FrequencyHeuristic, ReferenceEvaluator, Solver};
//! use wordle_assist::wordlists::{SOLUTIONS, WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let solutions = words_from_slice(SOLUTIONS);
//!
//! let solver = Solver::with_solutions(FrequencyHeuristic, &words, &solutions);
//! let mut game = ReferenceEvaluator::new(Word::new("chaos").unwrap());
//!
//! let outcome = solver.solve(&mut game, None).unwrap();
//! println!("won: {} in {} guesses", outcome.won, outcome.history.len());
//! ```

// Core domain types
pub mod core;

// Solving core
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
