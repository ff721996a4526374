//! Letter-coverage heuristic for large candidate sets
//!
//! Partitioning the candidates for every dictionary word is too slow when many
//! candidates remain. Instead words are ranked by how much of the candidates'
//! letter mass they cover, and only a shortlist is checked against the judge.

use super::{GuessProposer, makes_progress};
use crate::core::{ALPHABET_LEN, Word, WordId};
use crate::solver::{ShortlistPolicy, SolverState};
use log::trace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::cmp::Reverse;

/// Sum of candidate letter frequencies over the distinct letters of `word`
///
/// # Examples
/// ```
/// use absurdle_solver::core::Word;
/// use absurdle_solver::solver::coverage_score;
///
/// let mut freq = [0u32; 26];
/// freq[0] = 5; // a
/// freq[1] = 2; // b
/// // Repeated letters count once
/// assert_eq!(coverage_score(&Word::new("abba").unwrap(), &freq), 7);
/// ```
#[must_use]
pub fn coverage_score(word: &Word, freq: &[u32; ALPHABET_LEN]) -> u32 {
    let letters = word.letter_set();
    freq.iter()
        .enumerate()
        .filter(|&(i, _)| letters & (1 << i) != 0)
        .map(|(_, &f)| f)
        .sum()
}

/// Shortlist-then-scan proposer
#[derive(Debug, Clone)]
pub struct HeuristicProposer {
    policy: ShortlistPolicy,
    rng: Option<StdRng>,
}

impl HeuristicProposer {
    #[must_use]
    pub fn new(policy: ShortlistPolicy) -> Self {
        let rng = match policy {
            ShortlistPolicy::TopK(_) => None,
            ShortlistPolicy::Sample { seed, .. } => Some(StdRng::seed_from_u64(seed)),
        };
        Self { policy, rng }
    }

    /// Unguessed words worth a partition scan, best first
    ///
    /// Ranked by coverage score, then by letters shared with the target, then
    /// dictionary order.
    pub fn shortlist(&mut self, state: &SolverState<'_>) -> Vec<WordId> {
        let (pool, keep): (Vec<WordId>, usize) = match (self.policy, self.rng.as_mut()) {
            (ShortlistPolicy::Sample { size, .. }, Some(rng)) => {
                let unguessed: Vec<WordId> = state.unguessed().collect();
                let sample = unguessed.choose_multiple(rng, size).copied().collect();
                (sample, size)
            }
            (ShortlistPolicy::TopK(k) | ShortlistPolicy::Sample { size: k, .. }, _) => {
                (state.unguessed().collect(), k)
            }
        };

        let dictionary = state.dictionary();
        let target = state.target_word();
        let freq = state.letter_frequencies();

        let mut ranked: Vec<(Reverse<u32>, Reverse<usize>, WordId)> = pool
            .into_iter()
            .map(|id| {
                let word = dictionary.word(id);
                (
                    Reverse(coverage_score(word, freq)),
                    Reverse(word.shared_letters(target)),
                    id,
                )
            })
            .collect();
        ranked.sort_unstable();
        ranked.truncate(keep);
        ranked.into_iter().map(|(_, _, id)| id).collect()
    }
}

impl GuessProposer for HeuristicProposer {
    fn propose(&mut self, state: &mut SolverState<'_>) -> Option<WordId> {
        let candidates = state.possible_count();
        let shortlist = self.shortlist(state);
        trace!(
            "heuristic shortlist of {} for {candidates} candidates",
            shortlist.len()
        );

        for guess in shortlist {
            let Some(response) = state.respond(guess) else {
                continue;
            };
            if makes_progress(&response, candidates) {
                state.mark_guessed(guess);
                return Some(guess);
            }
        }

        None
    }
}
