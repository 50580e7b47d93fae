//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from a file (one word per line) or from the
//! embedded list.

use super::WORDS;
use crate::core::{Dictionary, DictionaryError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Load a dictionary from a file
///
/// Blank lines, malformed words and repeats are skipped (see
/// [`Dictionary::from_words_lenient`]).
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Dictionary` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_entropy_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = Dictionary::from_words_lenient(content.lines())?;
    log::info!("Loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// The dictionary compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded list is empty.
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    let dictionary = Dictionary::from_words_lenient(WORDS.iter().copied())?;
    log::info!("Loaded {} embedded words", dictionary.len());
    Ok(dictionary)
}
