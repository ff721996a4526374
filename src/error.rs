//! Error types
//!
//! Configuration errors are fatal for a session and are reported to the caller.
//! A [`Contradiction`] is recoverable and only ever seen by the search driver.

use crate::core::{Pattern, WordError, WordId};
use thiserror::Error;

/// The session cannot start: the target or dictionary is unusable
///
/// Distinct from an exhausted search, which is a valid outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("target word is empty")]
    EmptyTarget,

    #[error("invalid target word '{target}': {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: WordError,
    },

    #[error("dictionary has no {0}-letter words")]
    NoWordsOfLength(usize),

    #[error("target word '{0}' is not in the dictionary")]
    UnknownTarget(String),

    #[error("guess '{0}' is not in the dictionary")]
    UnknownGuess(String),
}

/// Filtering by a (guess, pattern) pair would remove the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern {pattern} for guess #{} excludes the target", .guess.index())]
pub struct Contradiction {
    pub guess: WordId,
    pub pattern: Pattern,
}
