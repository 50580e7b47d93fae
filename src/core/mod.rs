//! Core domain types for Wordle
//!
//! Words, feedback patterns and the dictionary. Everything here is pure and
//! immutable once constructed.

mod dictionary;
mod pattern;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use pattern::{LetterStatus, Pattern, feedback};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;
