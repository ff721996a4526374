//! Word solving command
//!
//! Searches for a guess sequence that forces the judge onto one target word.

use crate::core::{Dictionary, Pattern};
use crate::error::SolveError;
use crate::solver::{SearchBudget, SearchConfig, SearchDriver, SearchOutcome, SearchStats};
use log::info;
use std::time::{Duration, Instant};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub search: SearchConfig,
    pub budget: SearchBudget,
    /// Extra attempts with a reseeded sampler when a randomized search is exhausted
    pub retries: usize,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            search: SearchConfig::default(),
            budget: SearchBudget::unlimited(),
            retries: 0,
        }
    }

    #[must_use]
    pub const fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub const fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub const fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }
}

/// How a solve attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Solved,
    NoSolution,
    OutOfBudget,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub status: SolveStatus,
    pub guesses: Vec<GuessStep>,
    /// Searches run, including the first
    pub attempts: usize,
    /// Counters from the last search
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word against `dictionary`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is empty or not made of letters
/// - The dictionary has no words of the target's length
/// - The target is not in the dictionary
pub fn solve_word(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, SolveError> {
    let started = Instant::now();
    let mut attempt = 0;

    loop {
        let search = config
            .search
            .with_shortlist(config.search.shortlist.reseeded(attempt as u64));
        let mut driver = SearchDriver::with_config(dictionary, &config.target, &search)?;
        let outcome = driver.run(&config.budget);
        attempt += 1;

        let can_retry = search.shortlist.is_randomized() && attempt <= config.retries;
        if outcome == SearchOutcome::Exhausted && can_retry {
            info!("attempt {attempt} for '{}' exhausted, reseeding", config.target);
            continue;
        }

        let (status, guesses) = match outcome {
            SearchOutcome::Solved(solution) => {
                let mut before = dictionary.len();
                let guesses = solution
                    .steps
                    .into_iter()
                    .map(|step| {
                        let guess = GuessStep {
                            word: step.guess,
                            pattern: step.pattern,
                            candidates_before: before,
                            candidates_after: step.remaining,
                        };
                        before = step.remaining;
                        guess
                    })
                    .collect();
                (SolveStatus::Solved, guesses)
            }
            SearchOutcome::Exhausted => (SolveStatus::NoSolution, Vec::new()),
            SearchOutcome::BudgetExceeded => (SolveStatus::OutOfBudget, Vec::new()),
        };

        return Ok(SolveResult {
            target: driver.state().target_word().text().to_string(),
            status,
            guesses,
            attempts: attempt,
            stats: driver.stats(),
            duration: started.elapsed(),
        });
    }
}
