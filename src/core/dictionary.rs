//! Indexed word set for one search session
//!
//! A dictionary holds every valid word of a single length and assigns each one
//! a stable [`WordId`], so the solver can key caches and sets by small integers.

use super::Word;
use rustc_hash::FxHashMap;

/// Index of a word inside its [`Dictionary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Position of the word in dictionary order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Normalised, de-duplicated words of one length
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_len: usize,
    words: Vec<Word>,
    index: FxHashMap<String, WordId>,
}

impl Dictionary {
    /// Build a dictionary of all `word_len`-letter words in `raw`
    ///
    /// Each entry is trimmed and lowercased. Entries that are empty, contain
    /// whitespace or non-letters, or have another length are skipped.
    /// Duplicates keep their first position.
    ///
    /// # Examples
    /// ```
    /// use absurdle_solver::core::Dictionary;
    ///
    /// let dict = Dictionary::new([" ABCD ", "abce", "abcd", "ab cd", "abcdef"], 4);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.id_of("abcd").is_some());
    /// ```
    pub fn new<I, S>(raw: I, word_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashMap::default();

        for entry in raw {
            let Some(word) = normalize(entry.as_ref()) else {
                continue;
            };
            if word.len() != word_len || index.contains_key(word.text()) {
                continue;
            }
            let id = WordId(words.len() as u32);
            index.insert(word.text().to_string(), id);
            words.push(word);
        }

        Self {
            word_len,
            words,
            index,
        }
    }

    /// Length shared by every word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no word of the requested length was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word for an id issued by this dictionary
    ///
    /// # Panics
    /// Panics if `id` came from another dictionary and is out of range
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Look up a word's id (input is normalised first)
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        let word = normalize(text)?;
        self.index.get(word.text()).copied()
    }

    /// All ids in dictionary order
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len()).map(|i| WordId(i as u32))
    }

    /// All words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Trim and lowercase a raw entry; `None` if it is not a single valid word
fn normalize(raw: &str) -> Option<Word> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Word::new(trimmed).ok()
}
