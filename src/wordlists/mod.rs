//! Word lists
//!
//! The default dictionary is embedded in the binary; custom lists are read
//! from plain text files with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Dictionary;

/// Embedded dictionary restricted to `word_len`-letter words
///
/// # Examples
/// ```
/// use absurdle_solver::wordlists::default_dictionary;
///
/// let dict = default_dictionary(5);
/// assert!(dict.id_of("crane").is_some());
/// assert!(dict.words().iter().all(|w| w.len() == 5));
/// ```
#[must_use]
pub fn default_dictionary(word_len: usize) -> Dictionary {
    Dictionary::new(WORDS, word_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_has_common_lengths() {
        for len in 4..=6 {
            assert!(
                default_dictionary(len).len() > 100,
                "too few {len}-letter words"
            );
        }
        for &word in WORDS {
            assert!((4..=6).contains(&word.len()), "unexpected length: {word}");
        }
    }

    #[test]
    fn embedded_list_has_no_duplicates() {
        let dict = default_dictionary(5);
        let fives = WORDS.iter().filter(|w| w.len() == 5).count();
        assert_eq!(dict.len(), fives);
    }
}
