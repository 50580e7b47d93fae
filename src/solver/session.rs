//! Per-game solver state
//!
//! A session is `Uninitialized` until [`SolverSession::reset`] is called, then
//! `Ready`. All candidate state lives in the session and is exclusively owned
//! by it; the borrowed [`Solver`] is never mutated.

use super::SolverError;
use super::engine::Solver;
use super::filter::retain_consistent_word;
use crate::core::{LetterStatus, Pattern, WORD_LENGTH, Word};

/// What happened to the previous guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub guess: Word,
    pub statuses: [LetterStatus; WORD_LENGTH],
    /// False when the game engine refused the guess and consumed no round
    pub accepted: bool,
}

impl Outcome {
    #[must_use]
    pub const fn new(guess: Word, statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self {
            guess,
            statuses,
            accepted: true,
        }
    }

    #[must_use]
    pub fn from_pattern(guess: Word, pattern: Pattern) -> Self {
        Self::new(guess, pattern.statuses())
    }

    #[must_use]
    pub const fn rejected(guess: Word) -> Self {
        Self {
            guess,
            statuses: [LetterStatus::Unused; WORD_LENGTH],
            accepted: false,
        }
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        Pattern::from_statuses(self.statuses)
    }
}

#[derive(Debug, Clone)]
struct GameState {
    /// Dictionary indices still consistent with every observed outcome
    candidates: Vec<usize>,
    /// Indexed by dictionary position
    guessed: Vec<bool>,
    round: usize,
}

#[derive(Debug, Clone)]
enum SessionState {
    Uninitialized,
    Ready(GameState),
}

/// One game's worth of solver state
pub struct SolverSession<'a> {
    solver: &'a Solver,
    state: SessionState,
}

impl<'a> SolverSession<'a> {
    pub(crate) const fn new(solver: &'a Solver) -> Self {
        Self {
            solver,
            state: SessionState::Uninitialized,
        }
    }

    /// Start a new game: every dictionary word is a candidate again
    pub fn reset(&mut self) {
        let size = self.solver.dictionary().len();
        self.state = SessionState::Ready(GameState {
            candidates: (0..size).collect(),
            guessed: vec![false; size],
            round: 0,
        });
        log::debug!("Session reset with {size} candidates");
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    /// Number of guesses handed out since the last reset
    #[must_use]
    pub const fn round(&self) -> usize {
        match &self.state {
            SessionState::Ready(game) => game.round,
            SessionState::Uninitialized => 0,
        }
    }

    /// Remaining candidates; zero before the first reset
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        match &self.state {
            SessionState::Ready(game) => game.candidates.len(),
            SessionState::Uninitialized => 0,
        }
    }

    /// Remaining candidates in dictionary order
    pub fn candidates(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let dictionary = self.solver.dictionary();
        self.candidate_indices()
            .iter()
            .map(move |&i| dictionary.word(i))
    }

    /// Dictionary indices of the remaining candidates
    #[must_use]
    pub fn candidate_indices(&self) -> &[usize] {
        match &self.state {
            SessionState::Ready(game) => &game.candidates,
            SessionState::Uninitialized => &[],
        }
    }

    /// Drop every candidate inconsistent with `outcome`
    ///
    /// Returns how many candidates were eliminated. A dictionary guess is
    /// also marked as used so it is never proposed again.
    ///
    /// # Errors
    /// - `SolverError::NotReady` if `reset` has not been called
    /// - `SolverError::GuessRejected` if the outcome reports a refused guess
    pub fn observe(&mut self, outcome: &Outcome) -> Result<usize, SolverError> {
        let solver = self.solver;
        let SessionState::Ready(game) = &mut self.state else {
            return Err(SolverError::NotReady);
        };
        if !outcome.accepted {
            return Err(SolverError::GuessRejected(outcome.guess.text().to_string()));
        }

        let observed = outcome.pattern();
        let removed = match solver.dictionary().index_of(&outcome.guess) {
            Some(guess) => {
                game.guessed[guess] = true;
                solver.retain(&mut game.candidates, guess, observed)
            }
            None => retain_consistent_word(
                solver.dictionary().words(),
                &mut game.candidates,
                &outcome.guess,
                observed,
            ),
        };
        log::debug!(
            "Round {}: {} {} eliminated {removed}, {} candidates remain",
            game.round,
            outcome.guess,
            observed.to_emoji(),
            game.candidates.len()
        );
        Ok(removed)
    }

    /// Narrow the candidates with `previous`, then choose the next guess
    ///
    /// Pass `None` on the first round of a game. The returned word is always
    /// a dictionary member and is never offered twice in one game.
    ///
    /// # Errors
    /// - `SolverError::NotReady` if `reset` has not been called
    /// - `SolverError::GuessRejected` if `previous` reports a refused guess
    /// - `SolverError::EmptyCandidateSet` if no candidate survives the feedback
    pub fn pick_next_guess(&mut self, previous: Option<&Outcome>) -> Result<&'a Word, SolverError> {
        if let Some(outcome) = previous {
            self.observe(outcome)?;
        }

        let solver = self.solver;
        let SessionState::Ready(game) = &mut self.state else {
            return Err(SolverError::NotReady);
        };
        let choice = solver.choose(&game.candidates, &game.guessed)?;

        game.guessed[choice.index] = true;
        game.candidates.retain(|&c| c != choice.index);
        game.round += 1;

        let word = solver.dictionary().word(choice.index);
        log::debug!(
            "Round {}: picked {word} ({:.3} bits)",
            game.round,
            choice.entropy
        );
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::{ScanScope, SelectorConfig, TieBreak};

    const SCENARIO: [&str; 5] = ["abide", "speed", "crane", "adieu", "stone"];

    const LARGER: [&str; 20] = [
        "crane", "slate", "irate", "crate", "grate", "trace", "raise", "arise", "stare", "roast",
        "toast", "beast", "abide", "speed", "adieu", "stone", "eerie", "robin", "geese", "creep",
    ];

    fn solver(words: &[&str], config: SelectorConfig) -> Solver {
        Solver::new(
            Dictionary::from_words_lenient(words.iter().copied()).unwrap(),
            config,
        )
    }

    /// Plays a full game, returning the guesses made
    fn play(session: &mut SolverSession<'_>, secret: &Word, max_rounds: usize) -> Vec<Word> {
        session.reset();
        let mut guesses = Vec::new();
        let mut previous: Option<Outcome> = None;

        for _ in 0..max_rounds {
            let guess = session.pick_next_guess(previous.as_ref()).unwrap().clone();
            let pattern = Pattern::calculate(&guess, secret);
            guesses.push(guess.clone());
            if pattern.is_perfect() {
                break;
            }
            previous = Some(Outcome::from_pattern(guess, pattern));
        }
        guesses
    }

    #[test]
    fn pick_before_reset_is_not_ready() {
        let solver = solver(&SCENARIO, SelectorConfig::default());
        let mut session = solver.session();

        assert!(!session.is_ready());
        assert_eq!(session.pick_next_guess(None), Err(SolverError::NotReady));
        assert_eq!(session.candidate_count(), 0);
        assert_eq!(session.candidates().count(), 0);
    }

    #[test]
    fn reset_restores_full_dictionary() {
        let solver = solver(&SCENARIO, SelectorConfig::default());
        let mut session = solver.session();
        session.reset();

        let first = session.pick_next_guess(None).unwrap().clone();
        let secret = Word::new("crane").unwrap();
        let outcome = Outcome::from_pattern(first.clone(), Pattern::calculate(&first, &secret));
        session.pick_next_guess(Some(&outcome)).unwrap();
        assert!(session.candidate_count() < SCENARIO.len());

        session.reset();
        assert_eq!(session.candidate_count(), SCENARIO.len());
        assert_eq!(session.round(), 0);
        assert_eq!(session.pick_next_guess(None).unwrap(), &first);
    }

    #[test]
    fn concrete_scenario_converges_on_crane() {
        let solver = solver(&SCENARIO, SelectorConfig::default());
        let mut session = solver.session();
        let secret = Word::new("crane").unwrap();
        session.reset();

        let first = session.pick_next_guess(None).unwrap().clone();
        if first == secret {
            return;
        }

        let pattern = Pattern::calculate(&first, &secret);
        let outcome = Outcome::from_pattern(first.clone(), pattern);
        let second = session.pick_next_guess(Some(&outcome)).unwrap().clone();

        // Survivors are exactly the words that reproduce the feedback, minus guesses made
        let survivors: Vec<&Word> = session.candidates().collect();
        for word in solver.dictionary() {
            let consistent = Pattern::calculate(&first, word) == pattern;
            if survivors.contains(&word) {
                assert!(consistent && *word != first, "{word} should have been excluded");
            } else if consistent && *word != first {
                assert_eq!(word, &second, "{word} should have been kept");
            }
        }
        assert!(survivors.contains(&&secret) || second == secret);

        let guesses = play(&mut session, &secret, SCENARIO.len());
        assert_eq!(guesses.last(), Some(&secret));
        assert!(guesses.len() <= SCENARIO.len());
    }

    #[test]
    fn every_secret_is_found_within_dictionary_size() {
        for scan in [ScanScope::FullDictionary, ScanScope::CandidatesOnly] {
            for tie_break in [TieBreak::FirstEncountered, TieBreak::PreferCandidate] {
                let config = SelectorConfig::default()
                    .with_scan(scan)
                    .with_tie_break(tie_break);
                let solver = solver(&LARGER, config);
                let mut session = solver.session();

                for secret in solver.dictionary() {
                    let guesses = play(&mut session, secret, LARGER.len());
                    assert_eq!(
                        guesses.last(),
                        Some(secret),
                        "{scan:?}/{tie_break:?} failed on {secret}: {guesses:?}"
                    );
                    let mut unique = guesses.clone();
                    unique.sort();
                    unique.dedup();
                    assert_eq!(unique.len(), guesses.len(), "repeated guess for {secret}");
                }
            }
        }
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let solver = solver(&LARGER, SelectorConfig::default());
        let mut session = solver.session();
        let secret = Word::new("geese").unwrap();
        session.reset();

        let mut before = session.candidate_count();
        let mut previous: Option<Outcome> = None;
        loop {
            let guess = session.pick_next_guess(previous.as_ref()).unwrap().clone();
            assert!(session.candidate_count() <= before);
            before = session.candidate_count();

            let pattern = Pattern::calculate(&guess, &secret);
            if pattern.is_perfect() {
                break;
            }
            previous = Some(Outcome::from_pattern(guess, pattern));
        }
    }

    #[test]
    fn table_and_codec_play_identically() {
        let with_table = solver(&LARGER, SelectorConfig::default());
        let without = solver(&LARGER, SelectorConfig::default().with_pattern_table(false));
        let mut a = with_table.session();
        let mut b = without.session();

        for secret in with_table.dictionary() {
            assert_eq!(
                play(&mut a, secret, LARGER.len()),
                play(&mut b, secret, LARGER.len())
            );
        }
    }

    #[test]
    fn selection_repeats_across_sessions() {
        let solver = solver(&LARGER, SelectorConfig::default());
        let secret = Word::new("stone").unwrap();

        let first = play(&mut solver.session(), &secret, LARGER.len());
        for _ in 0..3 {
            assert_eq!(play(&mut solver.session(), &secret, LARGER.len()), first);
        }
    }

    #[test]
    fn inconsistent_feedback_empties_candidates() {
        let solver = solver(&SCENARIO, SelectorConfig::default());
        let mut session = solver.session();
        session.reset();

        let guess = session.pick_next_guess(None).unwrap().clone();
        // Nothing in the dictionary contains a Z, yet all greens for ZZZZZ is claimed
        let bogus = Outcome::from_pattern(Word::new("zzzzz").unwrap(), Pattern::PERFECT);
        assert_ne!(guess.text(), "zzzzz");
        assert_eq!(
            session.pick_next_guess(Some(&bogus)),
            Err(SolverError::EmptyCandidateSet)
        );
    }

    #[test]
    fn rejected_guess_is_reported() {
        let solver = solver(&SCENARIO, SelectorConfig::default());
        let mut session = solver.session();
        session.reset();

        let guess = session.pick_next_guess(None).unwrap().clone();
        let outcome = Outcome::rejected(guess.clone());
        assert_eq!(
            session.pick_next_guess(Some(&outcome)),
            Err(SolverError::GuessRejected(guess.text().to_string()))
        );
    }

    #[test]
    fn two_candidates_pick_first_in_order() {
        let solver = solver(&["crane", "trace"], SelectorConfig::default());
        let mut session = solver.session();
        session.reset();

        assert_eq!(session.pick_next_guess(None).unwrap().text(), "crane");
        assert_eq!(session.candidate_count(), 1);
    }

    #[test]
    fn observe_reports_eliminations() {
        let solver = solver(&LARGER, SelectorConfig::default());
        let mut session = solver.session();
        let secret = Word::new("toast").unwrap();
        let guess = Word::new("crane").unwrap();

        let outcome = Outcome::from_pattern(guess.clone(), Pattern::calculate(&guess, &secret));
        assert_eq!(session.observe(&outcome), Err(SolverError::NotReady));

        session.reset();
        let removed = session.observe(&outcome).unwrap();
        assert_eq!(removed + session.candidate_count(), LARGER.len());
        assert!(session.candidates().any(|w| *w == secret));
        assert!(session.candidates().all(|w| *w != guess));
        assert_eq!(session.candidate_indices().len(), session.candidate_count());
    }

    #[test]
    fn outcome_round_trips_pattern() {
        let word = Word::new("crane").unwrap();
        let pattern = Pattern::parse("GY-G-").unwrap();
        let outcome = Outcome::from_pattern(word, pattern);

        assert!(outcome.accepted);
        assert_eq!(outcome.pattern(), pattern);
    }
}
