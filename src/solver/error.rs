//! Solver error taxonomy
//!
//! All variants are local invariant violations; none are retried.

use crate::core::WordError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No dictionary word is consistent with the feedback seen so far
    #[error("no candidates remain: feedback is inconsistent or the answer is not in the dictionary")]
    EmptyCandidateSet,

    /// `pick_next_guess` called before `reset`
    #[error("session not ready: call reset() before picking a guess")]
    NotReady,

    #[error("malformed word: {0}")]
    MalformedWord(#[from] WordError),

    #[error("word '{0}' is not in the dictionary")]
    NotInDictionary(String),

    /// The harness reported that the game engine refused our last guess
    #[error("guess '{0}' was rejected by the game engine")]
    GuessRejected(String),
}
