//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word as text and as raw bytes.

use super::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 5-letter Wordle word
///
/// Immutable once built. Two words are equal iff their letters are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_solver::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Letter multiset as 26 counters, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.letters {
            counts[usize::from(letter - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
