//! Exhaustive guess scoring for small candidate sets

use super::{GuessProposer, makes_progress};
use crate::core::WordId;
use crate::solver::{AdversarialResponse, SolverState};
use log::trace;
use rayon::prelude::*;

/// Scores every unguessed dictionary word against the judge
///
/// Picks the guess whose response leaves the fewest candidates, then the one
/// sharing the fewest letters with the target, then the earliest in the dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactProposer;

impl ExactProposer {
    /// Best admissible guess and the response it draws, without recording it
    #[must_use]
    pub fn best_guess(state: &SolverState<'_>) -> Option<(WordId, AdversarialResponse)> {
        let candidates = state.possible_count();
        let dictionary = state.dictionary();
        let target = state.target_word();
        let pool: Vec<WordId> = state.unguessed().collect();

        pool.par_iter()
            .filter_map(|&guess| {
                let response = state.respond_shared(guess)?;
                if !makes_progress(&response, candidates) {
                    return None;
                }
                let overlap = dictionary.word(guess).shared_letters(target);
                Some(((response.remaining, overlap, guess), response))
            })
            .min_by_key(|&(key, _)| key)
            .map(|((_, _, guess), response)| (guess, response))
    }
}

impl GuessProposer for ExactProposer {
    fn propose(&mut self, state: &mut SolverState<'_>) -> Option<WordId> {
        let (guess, response) = Self::best_guess(state)?;
        trace!(
            "exact pick #{} leaves {} of {}",
            guess.index(),
            response.remaining,
            state.possible_count()
        );
        state.mark_guessed(guess);
        Some(guess)
    }
}
