//! Guess proposal
//!
//! Defines the [`GuessProposer`] trait and the adaptive proposer that picks a
//! tactic based on how many candidates remain.

mod exact;
mod heuristic;

pub use exact::ExactProposer;
pub use heuristic::{HeuristicProposer, coverage_score};

use super::{AdversarialResponse, SearchConfig, SolverState};
use crate::core::WordId;
use log::trace;

/// Chooses the next word to guess
pub trait GuessProposer {
    /// Propose the next guess and record it in the state's guessed words
    ///
    /// Returns `None` when no guess can be pursued toward the target.
    fn propose(&mut self, state: &mut SolverState<'_>) -> Option<WordId>;
}

/// Whether a response moves the search forward
///
/// Either the candidate set shrinks or the target has been hit.
#[must_use]
pub fn makes_progress(response: &AdversarialResponse, candidates: usize) -> bool {
    response.pattern.is_perfect() || response.remaining < candidates
}

/// Tactic used for a given number of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposerTier {
    /// One candidate left: guess the target
    Shortcut,

    /// Many candidates: letter-coverage shortlist then partition scan
    Heuristic,

    /// Few candidates: score every unguessed word
    Exact,
}

/// Proposer that switches tactic by candidate count
#[derive(Debug, Clone)]
pub struct AdaptiveProposer {
    /// Candidates > this use the heuristic
    pub exact_threshold: usize,
    heuristic: HeuristicProposer,
    exact: ExactProposer,
}

impl AdaptiveProposer {
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            exact_threshold: config.exact_threshold,
            heuristic: HeuristicProposer::new(config.shortlist),
            exact: ExactProposer,
        }
    }

    /// Get the tactic for `candidates` remaining words
    #[must_use]
    pub const fn tier(&self, candidates: usize) -> ProposerTier {
        if candidates == 1 {
            ProposerTier::Shortcut
        } else if candidates > self.exact_threshold {
            ProposerTier::Heuristic
        } else {
            ProposerTier::Exact
        }
    }
}

impl Default for AdaptiveProposer {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl GuessProposer for AdaptiveProposer {
    fn propose(&mut self, state: &mut SolverState<'_>) -> Option<WordId> {
        match self.tier(state.possible_count()) {
            ProposerTier::Shortcut => {
                let target = state.target();
                trace!("single candidate left, guessing the target");
                state.mark_guessed(target);
                Some(target)
            }
            ProposerTier::Heuristic => self.heuristic.propose(state),
            ProposerTier::Exact => self.exact.propose(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, Pattern};
    use crate::solver::ShortlistPolicy;

    #[test]
    fn tiers_by_candidate_count() {
        let proposer = AdaptiveProposer::default();
        assert_eq!(proposer.tier(1), ProposerTier::Shortcut);
        assert_eq!(proposer.tier(2), ProposerTier::Exact);
        assert_eq!(proposer.tier(100), ProposerTier::Exact);
        assert_eq!(proposer.tier(101), ProposerTier::Heuristic);
        assert_eq!(proposer.tier(5000), ProposerTier::Heuristic);
    }

    #[test]
    fn custom_threshold() {
        let config = SearchConfig::new(3, ShortlistPolicy::TopK(5));
        let proposer = AdaptiveProposer::new(&config);
        assert_eq!(proposer.tier(3), ProposerTier::Exact);
        assert_eq!(proposer.tier(4), ProposerTier::Heuristic);
    }

    #[test]
    fn single_candidate_shortcut_skips_partitioning() {
        let dict = Dictionary::new(["abcd", "abcf"], 4);
        let mut state = SolverState::new(&dict, "abcd").unwrap();
        let guess = dict.id_of("abcd").unwrap();
        state.apply(guess, Pattern::perfect(4)).unwrap();
        let cached = state.cached_patterns();

        let mut proposer = AdaptiveProposer::default();
        assert_eq!(proposer.propose(&mut state), Some(state.target()));
        assert_eq!(state.cached_patterns(), cached);
        assert!(state.is_guessed(state.target()));
    }

    #[test]
    fn progress_requires_shrink_or_solve() {
        let perfect = AdversarialResponse {
            pattern: Pattern::perfect(4),
            remaining: 1,
        };
        let stuck = AdversarialResponse {
            pattern: "0000".parse().unwrap(),
            remaining: 3,
        };
        assert!(makes_progress(&perfect, 1));
        assert!(!makes_progress(&stuck, 3));
        assert!(makes_progress(&stuck, 4));
    }
}
