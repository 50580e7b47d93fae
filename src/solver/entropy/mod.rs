//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions
//! and the selector built on top of it.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, Histogram, calculate_entropy, calculate_metrics, pattern_histogram,
    shannon_entropy,
};
pub use selector::{Choice, GuessAnalysis, choose_guess, guess_pool, rank_guesses, select_best_guess};
