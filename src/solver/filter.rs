//! Candidate consistency filter
//!
//! A candidate survives a round iff guessing the same word against it would
//! have produced exactly the observed pattern. Consistency is decided by
//! re-running the codec, never by per-color rules.

use super::SolverError;
use super::table::PatternSource;
use crate::core::{LetterStatus, Pattern, WORD_LENGTH, Word};

/// Could `candidate` be the secret, given `guess` produced `statuses`?
///
/// # Examples
/// ```
/// use wordle_entropy_solver::core::{Pattern, Word};
/// use wordle_entropy_solver::solver::is_consistent;
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("stone").unwrap();
/// let statuses = Pattern::calculate(&guess, &answer).statuses();
///
/// assert!(is_consistent(&answer, &guess, statuses));
/// assert!(!is_consistent(&Word::new("abide").unwrap(), &guess, statuses));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, statuses: [LetterStatus; WORD_LENGTH]) -> bool {
    is_consistent_code(candidate, guess, Pattern::from_statuses(statuses))
}

/// Same as [`is_consistent`] with an already-encoded pattern
#[inline]
#[must_use]
pub fn is_consistent_code(candidate: &Word, guess: &Word, observed: Pattern) -> bool {
    Pattern::calculate(guess, candidate) == observed
}

/// [`is_consistent`] for raw strings
///
/// # Errors
/// Returns `SolverError::MalformedWord` if either word is not 5 ASCII letters.
pub fn is_consistent_str(
    candidate: &str,
    guess: &str,
    statuses: [LetterStatus; WORD_LENGTH],
) -> Result<bool, SolverError> {
    let candidate = Word::new(candidate)?;
    let guess = Word::new(guess)?;
    Ok(is_consistent(&candidate, &guess, statuses))
}

/// Keep only candidate indices consistent with a dictionary guess
///
/// Order of survivors is preserved. Returns how many were removed.
pub fn retain_consistent<P: PatternSource + ?Sized>(
    source: &P,
    candidates: &mut Vec<usize>,
    guess: usize,
    observed: Pattern,
) -> usize {
    let before = candidates.len();
    candidates.retain(|&answer| source.pattern(guess, answer) == observed);
    before - candidates.len()
}

/// Keep only candidates consistent with a guess that may lie outside the dictionary
///
/// Returns how many were removed.
pub fn retain_consistent_word(
    words: &[Word],
    candidates: &mut Vec<usize>,
    guess: &Word,
    observed: Pattern,
) -> usize {
    let before = candidates.len();
    candidates.retain(|&answer| is_consistent_code(&words[answer], guess, observed));
    before - candidates.len()
}
