//! Per-session solver state
//!
//! Tracks the words still consistent with the feedback seen so far, the words
//! already proposed, and a private pattern cache.

use super::{AdversarialResponse, Partition, PatternCache, respond};
use crate::core::{ALPHABET_LEN, Dictionary, Pattern, Word, WordId};
use crate::error::{Contradiction, SolveError};
use rustc_hash::FxHashSet;

/// Validate and normalise a raw target string
///
/// # Errors
/// Returns `SolveError::EmptyTarget` for blank input and
/// `SolveError::InvalidTarget` when the text is not a single valid word.
pub fn parse_target(raw: &str) -> Result<Word, SolveError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SolveError::EmptyTarget);
    }
    Word::new(trimmed).map_err(|source| SolveError::InvalidTarget {
        target: trimmed.to_string(),
        source,
    })
}

/// Mutable search state for one target word
///
/// Invariant: `possible` always contains `target`.
#[derive(Debug, Clone)]
pub struct SolverState<'d> {
    dictionary: &'d Dictionary,
    target: WordId,
    possible: Vec<WordId>,
    guessed: FxHashSet<WordId>,
    cache: PatternCache,
    letter_freq: [u32; ALPHABET_LEN],
}

impl<'d> SolverState<'d> {
    /// Fresh state with every dictionary word as a candidate
    ///
    /// # Errors
    /// Fails if the target is malformed, the dictionary has no words of the
    /// target's length, or the target is not one of them.
    pub fn new(dictionary: &'d Dictionary, target: &str) -> Result<Self, SolveError> {
        let target_word = parse_target(target)?;

        if dictionary.is_empty() || dictionary.word_len() != target_word.len() {
            return Err(SolveError::NoWordsOfLength(target_word.len()));
        }

        let target = dictionary
            .id_of(target_word.text())
            .ok_or_else(|| SolveError::UnknownTarget(target_word.text().to_string()))?;

        Ok(Self::fresh(dictionary, target))
    }

    fn fresh(dictionary: &'d Dictionary, target: WordId) -> Self {
        let mut state = Self {
            dictionary,
            target,
            possible: dictionary.ids().collect(),
            guessed: FxHashSet::default(),
            cache: PatternCache::new(),
            letter_freq: [0; ALPHABET_LEN],
        };
        state.recount_letters();
        state
    }

    /// Fresh state for the same dictionary and target
    ///
    /// Neither the cache nor the guessed words are carried over.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::fresh(self.dictionary, self.target)
    }

    /// Replace the set of already-guessed words
    #[must_use]
    pub fn with_guessed(mut self, guessed: FxHashSet<WordId>) -> Self {
        self.guessed = guessed;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn target(&self) -> WordId {
        self.target
    }

    #[must_use]
    pub fn target_word(&self) -> &'d Word {
        self.dictionary.word(self.target)
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.dictionary.word_len()
    }

    /// Candidates still consistent with all accepted feedback
    #[must_use]
    pub fn possible(&self) -> &[WordId] {
        &self.possible
    }

    #[must_use]
    pub fn possible_count(&self) -> usize {
        self.possible.len()
    }

    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<WordId> {
        &self.guessed
    }

    #[must_use]
    pub fn is_guessed(&self, word: WordId) -> bool {
        self.guessed.contains(&word)
    }

    pub fn mark_guessed(&mut self, word: WordId) {
        self.guessed.insert(word);
    }

    /// Dictionary words not yet proposed, in dictionary order
    pub fn unguessed(&self) -> impl Iterator<Item = WordId> + '_ {
        self.dictionary.ids().filter(|id| !self.guessed.contains(id))
    }

    /// Occurrences of each letter across the current candidates
    #[must_use]
    pub const fn letter_frequencies(&self) -> &[u32; ALPHABET_LEN] {
        &self.letter_freq
    }

    /// Number of memoised patterns
    #[must_use]
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }

    /// Feedback for `guess` against `candidate`, memoised
    pub fn feedback(&mut self, guess: WordId, candidate: WordId) -> Pattern {
        self.cache.get(self.dictionary, guess, candidate)
    }

    /// Group the current candidates by the pattern `guess` produces
    pub fn partition(&mut self, guess: WordId) -> Partition {
        let dictionary = self.dictionary;
        Partition::build(&self.possible, |candidate| {
            self.cache.get(dictionary, guess, candidate)
        })
    }

    /// Same as [`Self::partition`] but only reads the cache
    #[must_use]
    pub fn partition_shared(&self, guess: WordId) -> Partition {
        Partition::build(&self.possible, |candidate| {
            self.cache.peek(self.dictionary, guess, candidate)
        })
    }

    /// The judge's response to `guess` given the current candidates
    pub fn respond(&mut self, guess: WordId) -> Option<AdversarialResponse> {
        let partition = self.partition(guess);
        respond(&partition, self.target)
    }

    /// Same as [`Self::respond`] but only reads the cache
    #[must_use]
    pub fn respond_shared(&self, guess: WordId) -> Option<AdversarialResponse> {
        respond(&self.partition_shared(guess), self.target)
    }

    /// Candidates consistent with `pattern` for `guess`
    ///
    /// # Errors
    /// Returns `Contradiction` if the target would not survive the filter.
    pub fn filter(&mut self, guess: WordId, pattern: Pattern) -> Result<Vec<WordId>, Contradiction> {
        let dictionary = self.dictionary;
        let narrowed: Vec<WordId> = self
            .possible
            .iter()
            .copied()
            .filter(|&candidate| self.cache.get(dictionary, guess, candidate) == pattern)
            .collect();

        if narrowed.contains(&self.target) {
            Ok(narrowed)
        } else {
            Err(Contradiction { guess, pattern })
        }
    }

    /// Narrow the candidates to those consistent with (`guess`, `pattern`)
    ///
    /// Leaves the state untouched on contradiction. Returns the new candidate count.
    ///
    /// # Errors
    /// Returns `Contradiction` if the target would not survive the filter.
    pub fn apply(&mut self, guess: WordId, pattern: Pattern) -> Result<usize, Contradiction> {
        self.possible = self.filter(guess, pattern)?;
        self.recount_letters();
        Ok(self.possible.len())
    }

    fn recount_letters(&mut self) {
        self.letter_freq = [0; ALPHABET_LEN];
        for &id in &self.possible {
            for (slot, &count) in self
                .letter_freq
                .iter_mut()
                .zip(self.dictionary.word(id).letter_counts().iter())
            {
                *slot += u32::from(count);
            }
        }
    }
}
