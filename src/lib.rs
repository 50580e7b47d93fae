//! Wordle Entropy Solver
//!
//! A candidate-elimination Wordle engine: every guess is the dictionary word
//! whose feedback distribution over the remaining candidates has maximal
//! Shannon entropy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy_solver::core::{Dictionary, Pattern, Word};
//! use wordle_entropy_solver::solver::{Outcome, SelectorConfig, Solver};
//!
//! let dictionary = Dictionary::from_words_lenient(["abide", "speed", "crane", "adieu", "stone"]).unwrap();
//! let solver = Solver::new(dictionary, SelectorConfig::default());
//! let secret = Word::new("crane").unwrap();
//!
//! let mut session = solver.session();
//! session.reset();
//! let mut previous = None;
//! loop {
//!     let guess = session.pick_next_guess(previous.as_ref()).unwrap().clone();
//!     let pattern = Pattern::calculate(&guess, &secret);
//!     if pattern.is_perfect() {
//!         break;
//!     }
//!     previous = Some(Outcome::from_pattern(guess, pattern));
//! }
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
