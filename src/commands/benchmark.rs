//! Benchmark command
//!
//! Plays many independent games, one session per target, in parallel over a
//! seeded sample of the dictionary.

use crate::core::{Pattern, Word};
use crate::solver::{Outcome, Solver, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Outcome of one benchmark game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    pub guesses: usize,
    pub success: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub worst_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct dictionary indices, reproducibly for a given seed
///
/// The sample is returned in dictionary order.
#[must_use]
pub fn sample_targets(solver: &Solver, count: usize, seed: u64) -> Vec<usize> {
    let len = solver.dictionary().len();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut targets = index::sample(&mut rng, len, count.min(len)).into_vec();
    targets.sort_unstable();
    targets
}

/// Play one full game against `target`
///
/// # Errors
///
/// Propagates any session error; with a dictionary target this only happens
/// if the solver is handed inconsistent feedback.
pub fn play_game(solver: &Solver, target: &Word) -> Result<GameRecord, SolverError> {
    let max_rounds = solver.dictionary().len();
    let mut session = solver.session();
    session.reset();

    let mut previous: Option<Outcome> = None;
    for round in 1..=max_rounds {
        let guess = session.pick_next_guess(previous.as_ref())?;
        let pattern = Pattern::calculate(guess, target);
        if pattern.is_perfect() {
            return Ok(GameRecord {
                target: target.text().to_string(),
                guesses: round,
                success: true,
            });
        }
        previous = Some(Outcome::from_pattern(guess.clone(), pattern));
    }

    Ok(GameRecord {
        target: target.text().to_string(),
        guesses: max_rounds,
        success: false,
    })
}

/// Run benchmark on the given dictionary indices
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(solver: &Solver, targets: &[usize]) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let records: Vec<GameRecord> = targets
        .par_iter()
        .map(|&index| {
            let target = solver.dictionary().word(index);
            let record = play_game(solver, target).unwrap_or_else(|err| {
                log::warn!("Game for {target} aborted: {err}");
                GameRecord {
                    target: target.text().to_string(),
                    guesses: 0,
                    success: false,
                }
            });
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&records, start.elapsed())
}

fn summarize(records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    let solved: Vec<&GameRecord> = records.iter().filter(|r| r.success).collect();
    for record in &solved {
        total_guesses += record.guesses;
        min_guesses = min_guesses.min(record.guesses);
        max_guesses = max_guesses.max(record.guesses);
        *distribution.entry(record.guesses).or_insert(0) += 1;
    }

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.target.clone(), r.guesses))
        .collect();
    worst_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    worst_words.truncate(5);

    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    BenchmarkResult {
        total_words: records.len(),
        solved: solved.len(),
        total_guesses,
        average_guesses,
        min_guesses: if solved.is_empty() { 0 } else { min_guesses },
        max_guesses,
        distribution,
        worst_words,
        duration,
        words_per_second: records.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
