//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisEntry, AnalysisResult, analyze_openings, analyze_word};
pub use benchmark::{BenchmarkResult, GameRecord, play_game, run_benchmark, sample_targets};
pub use solve::{GuessStep, SolveResult, solve_word};
