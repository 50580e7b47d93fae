//! Word solving command
//!
//! Plays one game through a [`SolverSession`](crate::solver::SolverSession)
//! against a known target and records every step.

use crate::core::{Pattern, Word};
use crate::solver::{Outcome, Solver, SolverError};

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with the given solver
///
/// The game is capped at one round per dictionary word, which the solver
/// never needs since every guess removes at least itself.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - No candidate fits the feedback, i.e. the target is not in the dictionary
pub fn solve_word(target: &str, solver: &Solver) -> Result<SolveResult, SolverError> {
    let target_word = Word::new(target)?;
    let max_rounds = solver.dictionary().len();

    let mut session = solver.session();
    session.reset();

    let mut guesses: Vec<GuessStep> = Vec::new();

    while guesses.len() < max_rounds {
        let remaining = session.candidate_indices().to_vec();
        let candidates_before = remaining.len();

        let guess = session.pick_next_guess(None)?;
        let guess_index = solver
            .dictionary()
            .index_of(guess)
            .ok_or_else(|| SolverError::NotInDictionary(guess.text().to_string()))?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = solver.metrics(guess_index, &remaining);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = Pattern::calculate(guess, &target_word);
        let candidates_after = remaining
            .iter()
            .filter(|&&c| solver.pattern(guess_index, c) == pattern)
            .count();

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target_word.text().to_string(),
            });
        }

        session.observe(&Outcome::from_pattern(guess.clone(), pattern))?;
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target_word.text().to_string(),
    })
}
