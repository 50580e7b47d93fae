//! Ordered, duplicate-free word universe
//!
//! The dictionary defines both the legal guesses and the possible answers.
//! Iteration order is fixed at construction and drives every tie-break.

use super::{WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary is empty")]
    Empty,
    #[error("duplicate word in dictionary: {0}")]
    Duplicate(String),
}

/// An ordered set of words with O(1) membership lookup
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<[u8; WORD_LENGTH], usize>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words, keeping their order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` for no words and
    /// `DictionaryError::Duplicate` on the first repeated word.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut index = FxHashMap::default();
        index.reserve(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(*word.letters(), i).is_some() {
                return Err(DictionaryError::Duplicate(word.text().to_string()));
            }
        }

        Ok(Self { words, index })
    }

    /// Build a dictionary from raw lines, skipping anything unusable
    ///
    /// Blank lines are ignored, malformed entries are skipped with a warning
    /// and later duplicates are dropped. First-seen order is kept.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no valid word survives.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_solver::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words_lenient(["crane", "CRANE", "toolong", "", "slate"]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.index_of_str("slate"), Some(1));
    /// ```
    pub fn from_words_lenient<'s, I>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut words = Vec::new();
        let mut seen = FxHashSet::default();

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if seen.insert(*word.letters()) {
                        words.push(word);
                    } else {
                        log::debug!("Dropping duplicate dictionary entry '{word}'");
                    }
                }
                Err(e) => log::warn!("Skipping dictionary entry '{trimmed}': {e}"),
            }
        }

        Self::new(words)
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Word at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word.letters()).copied()
    }

    /// Index lookup for raw text; malformed text is simply absent
    #[must_use]
    pub fn index_of_str(&self, text: &str) -> Option<usize> {
        Word::new(text).ok().and_then(|w| self.index_of(&w))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.letters())
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
