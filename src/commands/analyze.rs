//! Word analysis command
//!
//! Ranks opening guesses, or reports the information content of one word.

use crate::solver::entropy::GuessAnalysis;
use crate::solver::{Solver, SolverError};

/// One analyzed guess, resolved to its text
pub struct AnalysisEntry {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub is_candidate: bool,
}

/// Result of an analysis run
pub struct AnalysisResult {
    pub entries: Vec<AnalysisEntry>,
    pub total_candidates: usize,
}

fn entry(solver: &Solver, analysis: &GuessAnalysis) -> AnalysisEntry {
    AnalysisEntry {
        word: solver.dictionary().word(analysis.index).text().to_string(),
        entropy: analysis.entropy,
        expected_reduction: analysis.entropy.exp2(),
        expected_remaining: analysis.expected_remaining,
        max_partition: analysis.max_partition,
        is_candidate: analysis.is_candidate,
    }
}

/// The `count` best opening guesses for the solver's dictionary
#[must_use]
pub fn analyze_openings(solver: &Solver, count: usize) -> AnalysisResult {
    let entries = solver
        .rank_opening(count)
        .iter()
        .map(|analysis| entry(solver, analysis))
        .collect();

    AnalysisResult {
        entries,
        total_candidates: solver.dictionary().len(),
    }
}

/// Analyze a single word as an opening guess
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the solver's dictionary
pub fn analyze_word(solver: &Solver, word: &str) -> Result<AnalysisResult, SolverError> {
    let analysis = solver.analyze_word(word)?;

    Ok(AnalysisResult {
        entries: vec![entry(solver, &analysis)],
        total_candidates: solver.dictionary().len(),
    })
}
