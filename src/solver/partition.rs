//! Grouping candidates by feedback pattern
//!
//! Given a guess and a set of candidates, every candidate lands in exactly one
//! bucket: the one keyed by the pattern the guess would produce against it.

use crate::core::{Pattern, WordId};
use std::collections::BTreeMap;

/// Candidates grouped by the pattern a guess produces against them
///
/// Buckets iterate in pattern order and keep candidates in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    groups: BTreeMap<Pattern, Vec<WordId>>,
}

impl Partition {
    /// Group `candidates` by the pattern `feedback` assigns to each
    ///
    /// # Examples
    /// ```
    /// use absurdle_solver::core::{Dictionary, Pattern};
    /// use absurdle_solver::solver::Partition;
    ///
    /// let dict = Dictionary::new(["abcd", "abce", "wxyz"], 4);
    /// let guess = dict.id_of("wxyz").unwrap();
    /// let ids: Vec<_> = dict.ids().collect();
    ///
    /// let partition = Partition::build(&ids, |c| {
    ///     Pattern::calculate(dict.word(guess), dict.word(c))
    /// });
    /// assert_eq!(partition.len(), 2);
    /// assert_eq!(partition.max_size(), 2);
    /// ```
    pub fn build<F>(candidates: &[WordId], mut feedback: F) -> Self
    where
        F: FnMut(WordId) -> Pattern,
    {
        let mut groups: BTreeMap<Pattern, Vec<WordId>> = BTreeMap::new();
        for &candidate in candidates {
            groups.entry(feedback(candidate)).or_default().push(candidate);
        }
        Self { groups }
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size of the largest bucket (0 when empty)
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of partitioned candidates
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Candidates in one bucket
    #[must_use]
    pub fn bucket(&self, pattern: Pattern) -> Option<&[WordId]> {
        self.groups.get(&pattern).map(Vec::as_slice)
    }

    /// Check whether `word` sits in the bucket for `pattern`
    #[must_use]
    pub fn contains(&self, pattern: Pattern, word: WordId) -> bool {
        self.bucket(pattern).is_some_and(|b| b.contains(&word))
    }

    /// Patterns whose bucket has the maximum size, in pattern order
    pub fn largest(&self) -> impl Iterator<Item = Pattern> + '_ {
        let max = self.max_size();
        self.groups
            .iter()
            .filter(move |(_, words)| words.len() == max)
            .map(|(&pattern, _)| pattern)
    }

    /// All (pattern, bucket) pairs in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &[WordId])> {
        self.groups
            .iter()
            .map(|(&pattern, words)| (pattern, words.as_slice()))
    }
}
