//! Core domain types
//!
//! Words, dictionaries and feedback patterns. Everything here is pure and
//! deterministic; the search itself lives in [`crate::solver`].

mod dictionary;
mod pattern;
mod word;

pub use dictionary::{Dictionary, WordId};
pub use pattern::{Feedback, Pattern, PatternParseError};
pub use word::{ALPHABET_LEN, MAX_WORD_LEN, Word, WordError};
#[cfg(test)]
pub(crate) use word::letter_index;
