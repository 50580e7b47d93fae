//! Main Wordle solver interface
//!
//! [`Solver`] is the long-lived, read-only context: dictionary, optional
//! pattern table and selection policy. Games are played through
//! [`SolverSession`]s borrowed from it, so any number of games can run in
//! parallel against one solver.

use super::SolverError;
use super::config::SelectorConfig;
use super::entropy::{
    Choice, GuessAnalysis, GuessMetrics, calculate_metrics, choose_guess, guess_pool, rank_guesses,
};
use super::filter::retain_consistent;
use super::session::SolverSession;
use super::table::{PatternSource, PatternTable};
use crate::core::{Dictionary, Pattern, Word};

/// Shared solving context
pub struct Solver {
    dictionary: Dictionary,
    table: Option<PatternTable>,
    config: SelectorConfig,
}

impl Solver {
    /// Create a solver, building the pattern table if the config asks for it
    #[must_use]
    pub fn new(dictionary: Dictionary, config: SelectorConfig) -> Self {
        log::info!(
            "Initializing solver over {} words (scan: {:?}, tie-break: {:?})",
            dictionary.len(),
            config.scan,
            config.tie_break
        );
        let table = config
            .use_pattern_table
            .then(|| PatternTable::build(&dictionary));

        Self {
            dictionary,
            table,
            config,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub const fn table(&self) -> Option<&PatternTable> {
        self.table.as_ref()
    }

    /// Start a new, not yet reset, session
    #[must_use]
    pub const fn session(&self) -> SolverSession<'_> {
        SolverSession::new(self)
    }

    /// Pattern of guess index `guess` against answer index `answer`
    #[must_use]
    pub fn pattern(&self, guess: usize, answer: usize) -> Pattern {
        match &self.table {
            Some(table) => table.pattern(guess, answer),
            None => self.dictionary.pattern(guess, answer),
        }
    }

    /// Pick the next guess from `candidates`, skipping already guessed words
    pub(crate) fn choose(
        &self,
        candidates: &[usize],
        already_guessed: &[bool],
    ) -> Result<Choice, SolverError> {
        let pool = guess_pool(
            self.config.scan,
            self.dictionary.len(),
            candidates,
            already_guessed,
        );
        match &self.table {
            Some(table) => choose_guess(table, &pool, candidates, self.config.tie_break),
            None => choose_guess(&self.dictionary, &pool, candidates, self.config.tie_break),
        }
    }

    /// Drop candidates inconsistent with `observed` for dictionary guess `guess`
    pub(crate) fn retain(&self, candidates: &mut Vec<usize>, guess: usize, observed: Pattern) -> usize {
        match &self.table {
            Some(table) => retain_consistent(table, candidates, guess, observed),
            None => retain_consistent(&self.dictionary, candidates, guess, observed),
        }
    }

    /// Metrics of dictionary word `guess` against `candidates`
    #[must_use]
    pub fn metrics(&self, guess: usize, candidates: &[usize]) -> GuessMetrics {
        match &self.table {
            Some(table) => calculate_metrics(table, guess, candidates),
            None => calculate_metrics(&self.dictionary, guess, candidates),
        }
    }

    /// Top `n` opening guesses against the whole dictionary
    #[must_use]
    pub fn rank_opening(&self, n: usize) -> Vec<GuessAnalysis> {
        let all: Vec<usize> = (0..self.dictionary.len()).collect();
        self.rank(&all, n)
    }

    /// Top `n` guesses against an arbitrary candidate set
    #[must_use]
    pub fn rank(&self, candidates: &[usize], n: usize) -> Vec<GuessAnalysis> {
        let pool = guess_pool(self.config.scan, self.dictionary.len(), candidates, &[]);
        match &self.table {
            Some(table) => rank_guesses(table, &pool, candidates, n, self.config.tie_break),
            None => rank_guesses(&self.dictionary, &pool, candidates, n, self.config.tie_break),
        }
    }

    /// Metrics of one dictionary word as an opening guess
    ///
    /// # Errors
    /// Returns `SolverError::MalformedWord` for invalid text and
    /// `SolverError::NotInDictionary` for a word the dictionary lacks.
    pub fn analyze_word(&self, text: &str) -> Result<GuessAnalysis, SolverError> {
        let word = Word::new(text)?;
        let index = self
            .dictionary
            .index_of(&word)
            .ok_or_else(|| SolverError::NotInDictionary(word.text().to_string()))?;
        let all: Vec<usize> = (0..self.dictionary.len()).collect();

        let analysis = match &self.table {
            Some(table) => rank_guesses(table, &[index], &all, 1, self.config.tie_break),
            None => rank_guesses(&self.dictionary, &[index], &all, 1, self.config.tie_break),
        };
        analysis.into_iter().next().ok_or(SolverError::EmptyCandidateSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(config: SelectorConfig) -> Solver {
        let dict = Dictionary::from_words_lenient([
            "crane", "slate", "irate", "crate", "grate", "trace", "raise", "arise", "stare",
            "roast", "toast", "beast",
        ])
        .unwrap();
        Solver::new(dict, config)
    }

    #[test]
    fn table_built_only_when_requested() {
        assert!(solver(SelectorConfig::default()).table().is_some());
        assert!(
            solver(SelectorConfig::default().with_pattern_table(false))
                .table()
                .is_none()
        );
    }

    #[test]
    fn table_does_not_change_choices() {
        let with_table = solver(SelectorConfig::default());
        let without = solver(SelectorConfig::default().with_pattern_table(false));
        let all: Vec<usize> = (0..with_table.dictionary().len()).collect();
        let none_guessed = vec![false; all.len()];

        assert_eq!(
            with_table.choose(&all, &none_guessed),
            without.choose(&all, &none_guessed)
        );
        assert_eq!(with_table.rank_opening(5), without.rank_opening(5));
    }

    #[test]
    fn pattern_dispatch_agrees() {
        let with_table = solver(SelectorConfig::default());
        let without = solver(SelectorConfig::default().with_pattern_table(false));
        for g in 0..with_table.dictionary().len() {
            for a in 0..with_table.dictionary().len() {
                assert_eq!(with_table.pattern(g, a), without.pattern(g, a));
            }
        }
    }

    #[test]
    fn analyze_word_reports_metrics() {
        let solver = solver(SelectorConfig::default());
        let analysis = solver.analyze_word("CRANE").unwrap();

        assert_eq!(solver.dictionary().word(analysis.index).text(), "crane");
        assert!(analysis.entropy > 0.0);
        assert!(analysis.is_candidate);
        assert!(analysis.expected_remaining >= 1.0);
    }

    #[test]
    fn analyze_word_errors() {
        let solver = solver(SelectorConfig::default());
        assert!(matches!(
            solver.analyze_word("abide"),
            Err(SolverError::NotInDictionary(_))
        ));
        assert!(matches!(
            solver.analyze_word("cr4ne"),
            Err(SolverError::MalformedWord(_))
        ));
    }

    #[test]
    fn metrics_match_opening_rank() {
        let solver = solver(SelectorConfig::default());
        let all: Vec<usize> = (0..solver.dictionary().len()).collect();
        let best = &solver.rank_opening(1)[0];
        let metrics = solver.metrics(best.index, &all);

        assert!((metrics.entropy - best.entropy).abs() < 1e-12);
        assert_eq!(metrics.max_partition, best.max_partition);
    }

    #[test]
    fn rank_opening_is_sorted() {
        let solver = solver(SelectorConfig::default());
        let top = solver.rank_opening(4);
        assert_eq!(top.len(), 4);
        for pair in top.windows(2) {
            assert!(pair[0].entropy >= pair[1].entropy);
        }
    }
}
