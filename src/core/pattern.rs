//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess, one symbol per letter:
//! - 0 = no match (letter not available in the word)
//! - 1 = present (letter in word, wrong position)
//! - 2 = exact (letter in correct position)
//!
//! The pattern is stored as a base-3 number with the first position as the
//! most significant digit, so comparing codes of equal-length patterns is the
//! same as comparing their symbol sequences lexicographically.

use super::word::{ALPHABET_LEN, MAX_WORD_LEN, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Feedback {
    NoMatch = 0,
    Present = 1,
    Exact = 2,
}

impl Feedback {
    /// Stable numeric code (0, 1, 2)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    const fn from_code(code: u64) -> Self {
        match code {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::NoMatch,
        }
    }

    /// Digit used in the external text form
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::NoMatch => '0',
            Self::Present => '1',
            Self::Exact => '2',
        }
    }

    /// Emoji tile for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::NoMatch => '⬜',
            Self::Present => '🟨',
            Self::Exact => '🟩',
        }
    }
}

/// Feedback pattern for a guess against one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    len: u8,
    code: u64,
}

/// Error returned when parsing a pattern from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternParseError {
    #[error("pattern must be between 1 and {MAX_WORD_LEN} symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid pattern symbol '{0}'")]
    InvalidSymbol(char),
}

impl Pattern {
    /// Calculate the pattern when `guess` is compared against `answer`
    ///
    /// Implements Wordle's feedback rules including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches; every other answer letter goes into the available pool
    /// 2. Second pass, left to right: mark present letters while the pool still holds them
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use absurdle_solver::core::{Pattern, Word};
    ///
    /// let guess = Word::new("abce").unwrap();
    /// let answer = Word::new("abcd").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "2220");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must have equal length");

        let guess = guess.bytes();
        let answer = answer.bytes();
        let mut result = [Feedback::NoMatch; MAX_WORD_LEN];
        let mut available = [0u8; ALPHABET_LEN];

        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                result[i] = Feedback::Exact;
            } else {
                available[letter_index(a)] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if result[i] == Feedback::NoMatch {
                let count = &mut available[letter_index(g)];
                if *count > 0 {
                    result[i] = Feedback::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_feedback(&result[..guess.len()])
    }

    /// Build a pattern from per-position feedback
    ///
    /// # Panics
    /// Panics in debug mode if `symbols` is longer than [`MAX_WORD_LEN`]
    #[must_use]
    pub fn from_feedback(symbols: &[Feedback]) -> Self {
        debug_assert!(symbols.len() <= MAX_WORD_LEN);
        let code = symbols
            .iter()
            .fold(0u64, |acc, &s| acc * 3 + u64::from(s.code()));
        Self {
            len: symbols.len() as u8,
            code,
        }
    }

    /// The all-exact pattern of the given length
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self {
            len: len as u8,
            code: 3u64.pow(len as u32) - 1,
        }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True for the zero-length pattern, which no valid word produces
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u64 {
        self.code
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.code == 3u64.pow(self.len as u32) - 1
    }

    /// Feedback at `position` (0-based, left to right)
    ///
    /// # Panics
    /// Panics in debug mode if `position >= len`
    #[must_use]
    pub const fn feedback_at(self, position: usize) -> Feedback {
        debug_assert!(position < self.len as usize);
        let shift = 3u64.pow((self.len as usize - 1 - position) as u32);
        Feedback::from_code((self.code / shift) % 3)
    }

    /// Iterate feedback left to right
    pub fn iter(self) -> impl Iterator<Item = Feedback> {
        (0..self.len()).map(move |i| self.feedback_at(i))
    }

    /// Tie-break weight used by the adversarial judge
    ///
    /// `Σ vᵢ·10^(L−i−1) + Σ 10^(L+vᵢ)` over symbol codes `vᵢ`. The second sum
    /// dominates and grows with the number of informative symbols; the first
    /// orders patterns with the same symbol counts, earlier positions weighing more.
    #[must_use]
    pub fn tie_break_weight(self) -> u128 {
        let len = self.len as u32;
        self.iter()
            .enumerate()
            .map(|(i, f)| {
                let value = u32::from(f.code());
                u128::from(value) * 10u128.pow(len - i as u32 - 1) + 10u128.pow(len + value)
            })
            .sum()
    }

    /// Entropy-loss score of the pattern; the judge prefers higher scores among ties
    #[must_use]
    pub fn tie_break_score(self) -> i128 {
        // weight < 10^35 for 32 letters, well inside i128
        -(self.tie_break_weight() as i128)
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    /// Digit form: "0" no match, "1" present, "2" exact
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.iter() {
            write!(f, "{}", feedback.digit())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternParseError;

    /// Parse a pattern like "2210", "GY-", or "🟩🟨⬜"
    ///
    /// Accepts:
    /// - '2'/'G'/'g'/🟩 for exact
    /// - '1'/'Y'/'y'/🟨 for present
    /// - '0'/'-'/'_'/⬜/⬛ for no match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(|ch| match ch {
                '2' | 'G' | 'g' | '🟩' => Ok(Feedback::Exact),
                '1' | 'Y' | 'y' | '🟨' => Ok(Feedback::Present),
                '0' | '-' | '_' | '⬜' | '⬛' => Ok(Feedback::NoMatch),
                other => Err(PatternParseError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.is_empty() || symbols.len() > MAX_WORD_LEN {
            return Err(PatternParseError::InvalidLength(symbols.len()));
        }

        Ok(Self::from_feedback(&symbols))
    }
}
