//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use solve::{GuessStep, SolveResult, solve_word};
