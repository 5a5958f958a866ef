//! Solving core: constraints, statistics, ranking and the solve loop

pub mod constraints;
pub mod distribution;
pub mod engine;
pub mod evaluator;
pub mod ranker;

pub use constraints::{ConstraintState, ScoreMode};
pub use distribution::DistributionStats;
pub use engine::{MAX_ATTEMPTS, Outcome, Progress, Solver, Suggestion};
pub use evaluator::{Evaluator, ReferenceEvaluator};
pub use ranker::{FrequencyHeuristic, Heuristic, rank_words};
