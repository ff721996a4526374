//! Word representation
//!
//! A Word is a validated, lowercase ASCII string of 1 to [`MAX_WORD_LEN`] letters.
//! Unlike classic Wordle, the length is not fixed: it is whatever the target's length is.

use std::fmt;
use thiserror::Error;

/// Longest word the solver accepts
///
/// Bounded by the exact tie-break weight of a pattern, which is computed in `u128`.
pub const MAX_WORD_LEN: usize = 32;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A validated lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be between 1 and {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or greater than [`MAX_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use absurdle_solver::core::Word;
    ///
    /// let word = Word::new("Abcd").unwrap();
    /// assert_eq!(word.text(), "abcd");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("ab1d").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a valid word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Occurrence count of each letter, indexed by `letter - b'a'`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &b in self.bytes() {
            counts[letter_index(b)] += 1;
        }
        counts
    }

    /// Bit set of the distinct letters in the word (bit 0 = 'a')
    #[must_use]
    pub fn letter_set(&self) -> u32 {
        self.bytes()
            .iter()
            .fold(0, |set, &b| set | (1 << letter_index(b)))
    }

    /// Count positions of `self` whose letter appears anywhere in `other`
    ///
    /// Repeated letters in `self` count once per position.
    #[must_use]
    pub fn shared_letters(&self, other: &Self) -> usize {
        let other_set = other.letter_set();
        self.bytes()
            .iter()
            .filter(|&&b| other_set & (1 << letter_index(b)) != 0)
            .count()
    }
}

/// Index of a lowercase ASCII letter in the alphabet
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("abcd").unwrap().len(), 4);
        assert_eq!(Word::new("strength").unwrap().len(), 8);
        assert!(Word::new("a".repeat(MAX_WORD_LEN)).is_ok());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LEN + 1)),
            Err(WordError::InvalidLength(33))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new(" cran"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_letter_set() {
        let set = Word::new("abba").unwrap().letter_set();
        assert_eq!(set, 0b11);
    }

    #[test]
    fn word_shared_letters_counts_positions() {
        let target = Word::new("abcd").unwrap();
        assert_eq!(Word::new("abce").unwrap().shared_letters(&target), 3);
        assert_eq!(Word::new("wxyz").unwrap().shared_letters(&target), 0);
        // Both a's count even though the target has one
        assert_eq!(Word::new("aazz").unwrap().shared_letters(&target), 2);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let a = Word::new("abcd").unwrap();
        let b = Word::new("abce").unwrap();
        assert!(a < b);
    }
}
