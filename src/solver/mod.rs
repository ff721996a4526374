//! Adversarial search
//!
//! Partitioning, the adversarial judge, guess proposal and the backtracking
//! search driver.

mod adversary;
mod cache;
mod config;
mod partition;
pub mod proposer;
mod search;
mod state;

pub use adversary::{AdversarialResponse, respond};
pub use cache::PatternCache;
pub use config::{SearchBudget, SearchConfig, ShortlistPolicy};
pub use partition::Partition;
pub use proposer::{
    AdaptiveProposer, ExactProposer, GuessProposer, HeuristicProposer, ProposerTier,
    coverage_score, makes_progress,
};
pub use search::{
    HistoryEntry, SearchDriver, SearchOutcome, SearchStats, SearchStatus, Solution, SolutionStep,
    find_solution,
};
pub use state::{SolverState, parse_target};
