//! Command implementations

pub mod analyze;
pub mod batch;
pub mod solve;

pub use analyze::{AnalysisResult, BucketSummary, analyze_guess};
pub use batch::{BatchConfig, BatchStatistics, WordResult, run_batch};
pub use solve::{GuessStep, SolveConfig, SolveResult, SolveStatus, solve_word};
