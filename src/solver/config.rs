//! Guess selection policy knobs

use clap::ValueEnum;

/// Which words are scored as potential guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScanScope {
    /// Score every dictionary word: stronger play, O(N×M) per round
    #[default]
    #[value(name = "full")]
    FullDictionary,
    /// Score only remaining candidates: faster, weaker play
    #[value(name = "candidates")]
    CandidatesOnly,
}

/// How equal-entropy guesses are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TieBreak {
    /// Keep the first maximum in scan order
    #[default]
    #[value(name = "first")]
    FirstEncountered,
    /// Among equal maxima, prefer a word that could still be the answer
    PreferCandidate,
}

/// Configuration for the guess selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    pub scan: ScanScope,
    pub tie_break: TieBreak,
    /// Precompute the full guess × answer pattern table at startup
    pub use_pattern_table: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            scan: ScanScope::default(),
            tie_break: TieBreak::default(),
            use_pattern_table: true,
        }
    }
}

impl SelectorConfig {
    #[must_use]
    pub const fn with_scan(mut self, scan: ScanScope) -> Self {
        self.scan = scan;
        self
    }

    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub const fn with_pattern_table(mut self, enabled: bool) -> Self {
        self.use_pattern_table = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_strong_play() {
        let config = SelectorConfig::default();
        assert_eq!(config.scan, ScanScope::FullDictionary);
        assert_eq!(config.tie_break, TieBreak::FirstEncountered);
        assert!(config.use_pattern_table);
    }

    #[test]
    fn builders_override_fields() {
        let config = SelectorConfig::default()
            .with_scan(ScanScope::CandidatesOnly)
            .with_tie_break(TieBreak::PreferCandidate)
            .with_pattern_table(false);

        assert_eq!(config.scan, ScanScope::CandidatesOnly);
        assert_eq!(config.tie_break, TieBreak::PreferCandidate);
        assert!(!config.use_pattern_table);
    }

    #[test]
    fn value_enum_names() {
        assert_eq!(ScanScope::from_str("full", false), Ok(ScanScope::FullDictionary));
        assert_eq!(ScanScope::from_str("candidates", false), Ok(ScanScope::CandidatesOnly));
        assert_eq!(TieBreak::from_str("first", false), Ok(TieBreak::FirstEncountered));
        assert_eq!(
            TieBreak::from_str("prefer-candidate", false),
            Ok(TieBreak::PreferCandidate)
        );
    }
}
