//! Search configuration
//!
//! Tunables for guess proposal and the caller-imposed budget for a search run.

use std::time::Duration;

/// How the heuristic proposer narrows the dictionary before partition scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortlistPolicy {
    /// Keep the best `k` words by letter coverage (deterministic)
    TopK(usize),

    /// Draw `size` unguessed words at random, then rank them by letter coverage
    Sample { size: usize, seed: u64 },
}

impl ShortlistPolicy {
    /// Default shortlist length
    pub const DEFAULT_SIZE: usize = 50;

    /// Same policy with a different seed for retry `attempt` (no-op for `TopK`)
    #[must_use]
    pub const fn reseeded(self, attempt: u64) -> Self {
        match self {
            Self::TopK(k) => Self::TopK(k),
            Self::Sample { size, seed } => Self::Sample {
                size,
                seed: seed.wrapping_add(attempt),
            },
        }
    }

    /// Whether a rerun can behave differently
    #[must_use]
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::Sample { .. })
    }
}

impl Default for ShortlistPolicy {
    fn default() -> Self {
        Self::TopK(Self::DEFAULT_SIZE)
    }
}

/// Guess proposal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Candidates > this use the heuristic proposer, otherwise the exact one
    pub exact_threshold: usize,

    pub shortlist: ShortlistPolicy,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(exact_threshold: usize, shortlist: ShortlistPolicy) -> Self {
        Self {
            exact_threshold,
            shortlist,
        }
    }

    #[must_use]
    pub const fn with_shortlist(mut self, shortlist: ShortlistPolicy) -> Self {
        self.shortlist = shortlist;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(100, ShortlistPolicy::default())
    }
}

/// Limits checked between search steps
///
/// Backtracking has no useful upper bound on large dictionaries, so callers
/// that need to stay responsive set one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    pub max_steps: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// No limits
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_steps: None,
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// True once `steps` or `elapsed` reach a limit
    #[must_use]
    pub fn is_spent(&self, steps: usize, elapsed: Duration) -> bool {
        self.max_steps.is_some_and(|max| steps >= max)
            || self.time_limit.is_some_and(|limit| elapsed >= limit)
    }
}
