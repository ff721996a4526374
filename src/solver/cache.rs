//! Pattern memoisation for one solver state

use crate::core::{Dictionary, Pattern, WordId};
use rustc_hash::FxHashMap;

/// Append-only map from (guess, candidate) to their feedback pattern
///
/// Owned by a single `SolverState`; a rebuilt state starts with an empty cache.
#[derive(Debug, Default, Clone)]
pub struct PatternCache {
    patterns: FxHashMap<(WordId, WordId), Pattern>,
}

impl PatternCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern for the pair, computing and remembering it on a miss
    pub fn get(&mut self, dictionary: &Dictionary, guess: WordId, candidate: WordId) -> Pattern {
        *self
            .patterns
            .entry((guess, candidate))
            .or_insert_with(|| Pattern::calculate(dictionary.word(guess), dictionary.word(candidate)))
    }

    /// Pattern for the pair without writing to the cache
    ///
    /// Used from parallel scans that only hold a shared borrow.
    #[must_use]
    pub fn peek(&self, dictionary: &Dictionary, guess: WordId, candidate: WordId) -> Pattern {
        self.patterns
            .get(&(guess, candidate))
            .copied()
            .unwrap_or_else(|| {
                Pattern::calculate(dictionary.word(guess), dictionary.word(candidate))
            })
    }

    /// Number of cached pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(["abcd", "abce", "wxyz"], 4)
    }

    #[test]
    fn cache_is_transparent() {
        let dict = dictionary();
        let mut cache = PatternCache::new();
        let guess = dict.id_of("abce").unwrap();
        let answer = dict.id_of("abcd").unwrap();

        let first = cache.get(&dict, guess, answer);
        let second = cache.get(&dict, guess, answer);
        assert_eq!(first, second);
        assert_eq!(first, cache.peek(&dict, guess, answer));
        assert_eq!(
            first,
            Pattern::calculate(dict.word(guess), dict.word(answer))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_key_is_ordered_pair() {
        let dict = dictionary();
        let mut cache = PatternCache::new();
        let a = dict.id_of("abcd").unwrap();
        let w = dict.id_of("wxyz").unwrap();

        cache.get(&dict, a, w);
        cache.get(&dict, w, a);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn peek_does_not_populate() {
        let dict = dictionary();
        let cache = PatternCache::new();
        let a = dict.id_of("abcd").unwrap();
        let _ = cache.peek(&dict, a, a);
        assert!(cache.is_empty());
    }
}
