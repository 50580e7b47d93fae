//! Wordle Entropy Solver - CLI
//!
//! Plays, analyzes and benchmarks the entropy-maximizing solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_entropy_solver::{
    commands::{analyze_openings, analyze_word, run_benchmark, sample_targets, solve_word},
    core::Dictionary,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{ScanScope, SelectorConfig, Solver, TieBreak},
    wordlists::loader::{embedded_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy_solver",
    about = "Wordle solver that always plays the maximum-entropy guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Which words may be guessed
    #[arg(long, global = true, value_enum, default_value_t = ScanScope::default())]
    scan: ScanScope,

    /// How equal-entropy guesses are ordered
    #[arg(long, global = true, value_enum, default_value_t = TieBreak::default())]
    tie_break: TieBreak,

    /// Compute feedback on the fly instead of precomputing the pattern table
    #[arg(long, global = true)]
    no_table: bool,

    /// Log solver decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Rank opening guesses, or analyze one word
    Analyze {
        /// Word to analyze (default: rank the best openings)
        word: Option<String>,

        /// Number of openings to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Benchmark solver performance on a random sample
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the word sample
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
        None => embedded_dictionary().context("embedded word list is empty"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    let config = SelectorConfig::default()
        .with_scan(cli.scan)
        .with_tie_break(cli.tie_break)
        .with_pattern_table(!cli.no_table);
    let solver = Solver::new(dictionary, config);

    match cli.command {
        Commands::Solve { word } => {
            let result =
                solve_word(&word, &solver).with_context(|| format!("could not solve '{word}'"))?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Analyze { word, count } => {
            let result = match word {
                Some(word) => analyze_word(&solver, &word)
                    .with_context(|| format!("could not analyze '{word}'"))?,
                None => analyze_openings(&solver, count),
            };
            print_analysis_result(&result);
        }
        Commands::Benchmark { count, seed } => {
            let targets = sample_targets(&solver, count, seed);
            println!(
                "Running benchmark on {} random words (seed {seed})...",
                targets.len()
            );
            let result = run_benchmark(&solver, &targets);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
