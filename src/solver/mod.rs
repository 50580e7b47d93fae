//! Wordle solving engine
//!
//! Candidate filtering, entropy-based guess selection and the per-game
//! session that ties them together.

pub mod config;
mod engine;
pub mod entropy;
mod error;
pub mod filter;
mod session;
pub mod table;

pub use config::{ScanScope, SelectorConfig, TieBreak};
pub use engine::Solver;
pub use error::SolverError;
pub use filter::{is_consistent, is_consistent_code, is_consistent_str};
pub use session::{Outcome, SolverSession};
pub use table::{PatternSource, PatternTable};
