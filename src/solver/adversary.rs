//! Adversarial response selection
//!
//! Models the judge of an adversarial Wordle: it reports the pattern whose
//! bucket keeps the most words alive, breaking ties by pattern score. A guess
//! can only be pursued toward the target when the judge's choice contains it.

use super::Partition;
use crate::core::{Pattern, WordId};

/// Pattern the judge reports for a guess, with the size of its bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdversarialResponse {
    pub pattern: Pattern,
    pub remaining: usize,
}

/// Decide which pattern the judge reports, given it must keep `target` alive
///
/// Returns `None` when no target-containing bucket is both of maximum size
/// and tied for the best tie-break score among all maximum-size buckets.
///
/// # Examples
/// ```
/// use absurdle_solver::core::{Dictionary, Pattern};
/// use absurdle_solver::solver::{Partition, respond};
///
/// let dict = Dictionary::new(["abcd", "abce", "wxyz", "abcf"], 4);
/// let guess = dict.id_of("abce").unwrap();
/// let ids: Vec<_> = dict.ids().collect();
/// let partition = Partition::build(&ids, |c| Pattern::calculate(dict.word(guess), dict.word(c)));
///
/// let response = respond(&partition, dict.id_of("abcd").unwrap()).unwrap();
/// assert_eq!(response.pattern.to_string(), "2220");
/// assert_eq!(response.remaining, 2);
/// ```
#[must_use]
pub fn respond(partition: &Partition, target: WordId) -> Option<AdversarialResponse> {
    let remaining = partition.max_size();
    let max_patterns: Vec<(Pattern, i128)> = partition
        .largest()
        .map(|pattern| (pattern, pattern.tie_break_score()))
        .collect();

    let best_score = max_patterns.iter().map(|&(_, score)| score).max()?;

    let target_patterns: Vec<(Pattern, i128)> = max_patterns
        .into_iter()
        .filter(|&(pattern, _)| partition.contains(pattern, target))
        .collect();

    target_patterns
        .into_iter()
        .find(|&(_, score)| score == best_score)
        .map(|(pattern, _)| AdversarialResponse { pattern, remaining })
}
