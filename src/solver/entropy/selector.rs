//! Entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).
//! Scores are computed in parallel; the winner is picked by a sequential scan
//! so the result never depends on thread scheduling.

use super::calculator::{calculate_entropy, calculate_metrics};
use crate::solver::SolverError;
use crate::solver::config::{ScanScope, TieBreak};
use crate::solver::table::PatternSource;
use rayon::prelude::*;

/// Entropies closer than this are treated as tied
const ENTROPY_EPSILON: f64 = 1e-9;

/// The word picked for the next round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    /// Dictionary index of the guess
    pub index: usize,
    /// Entropy of the guess over the candidates it was scored against
    pub entropy: f64,
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub index: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub is_candidate: bool,
}

fn membership(word_count: usize, candidates: &[usize]) -> Vec<bool> {
    let mut member = vec![false; word_count];
    for &c in candidates {
        member[c] = true;
    }
    member
}

/// Select best guess by maximizing entropy
///
/// Returns the best guess from `guess_pool` with its entropy, or `None` if the
/// pool is empty. Ties go to the first maximum in pool order unless
/// `tie_break` asks for a remaining candidate.
#[must_use]
pub fn select_best_guess<P: PatternSource + ?Sized>(
    source: &P,
    guess_pool: &[usize],
    candidates: &[usize],
    tie_break: TieBreak,
) -> Option<(usize, f64)> {
    let scores: Vec<f64> = guess_pool
        .par_iter()
        .map(|&guess| calculate_entropy(source, guess, candidates))
        .collect();

    let member = membership(source.word_count(), candidates);
    let mut best: Option<(usize, f64)> = None;

    for (&guess, &entropy) in guess_pool.iter().zip(&scores) {
        let replace = match best {
            None => true,
            Some((current, best_entropy)) => {
                entropy > best_entropy + ENTROPY_EPSILON
                    || (tie_break == TieBreak::PreferCandidate
                        && (entropy - best_entropy).abs() <= ENTROPY_EPSILON
                        && member[guess]
                        && !member[current])
            }
        };
        if replace {
            best = Some((guess, entropy));
        }
    }

    best
}

/// Words eligible as guesses this round
///
/// `already_guessed` is indexed by dictionary position; flagged words are left out.
#[must_use]
pub fn guess_pool(
    scan: ScanScope,
    word_count: usize,
    candidates: &[usize],
    already_guessed: &[bool],
) -> Vec<usize> {
    let allowed = |i: &usize| !already_guessed.get(*i).copied().unwrap_or(false);
    match scan {
        ScanScope::FullDictionary => (0..word_count).filter(allowed).collect(),
        ScanScope::CandidatesOnly => candidates.iter().copied().filter(allowed).collect(),
    }
}

/// Pick the next guess for a candidate set
///
/// One or two candidates short-circuit to the first candidate. Otherwise the
/// pool is scored by entropy.
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` when `candidates` is empty.
pub fn choose_guess<P: PatternSource + ?Sized>(
    source: &P,
    guess_pool: &[usize],
    candidates: &[usize],
    tie_break: TieBreak,
) -> Result<Choice, SolverError> {
    match candidates {
        [] => Err(SolverError::EmptyCandidateSet),
        [only] => Ok(Choice {
            index: *only,
            entropy: 0.0,
        }),
        [first, _] => Ok(Choice {
            index: *first,
            entropy: 1.0,
        }),
        _ => {
            let (index, entropy) = select_best_guess(source, guess_pool, candidates, tie_break)
                // An exhausted pool can still fall back on a live candidate
                .unwrap_or((candidates[0], 0.0));
            Ok(Choice { index, entropy })
        }
    }
}

/// Rank the pool by entropy and return the top `n`
///
/// Sorting is stable, so equal entropies keep pool order (candidates first
/// under `TieBreak::PreferCandidate`).
#[must_use]
pub fn rank_guesses<P: PatternSource + ?Sized>(
    source: &P,
    guess_pool: &[usize],
    candidates: &[usize],
    n: usize,
    tie_break: TieBreak,
) -> Vec<GuessAnalysis> {
    let member = membership(source.word_count(), candidates);

    let mut analyses: Vec<GuessAnalysis> = guess_pool
        .par_iter()
        .map(|&index| {
            let metrics = calculate_metrics(source, index, candidates);
            GuessAnalysis {
                index,
                entropy: metrics.entropy,
                expected_remaining: metrics.expected_remaining,
                max_partition: metrics.max_partition,
                is_candidate: member[index],
            }
        })
        .collect();

    analyses.sort_by(|a, b| {
        let by_entropy = b.entropy.total_cmp(&a.entropy);
        match tie_break {
            TieBreak::FirstEncountered => by_entropy,
            TieBreak::PreferCandidate => by_entropy.then(b.is_candidate.cmp(&a.is_candidate)),
        }
    });

    analyses.truncate(n);
    analyses
}
