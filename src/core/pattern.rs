//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Unused (letter not in word, or all occurrences accounted for)
//! - 1 = Misplaced (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Position 0 is the least
//! significant digit everywhere in this crate.

use super::{WORD_LENGTH, Word, WordError};

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the answer (yellow)
    Misplaced,
    /// Letter not in the answer, or every occurrence already claimed (gray)
    Unused,
}

impl LetterStatus {
    /// Base-3 digit for this status
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::Misplaced => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`LetterStatus::digit`]; any value above 1 maps to `Correct`
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Unused,
            1 => Self::Misplaced,
            _ => Self::Correct,
        }
    }

    /// Parse a feedback character
    ///
    /// Accepts 'G'/'g'/'2'/🟩, 'Y'/'y'/'1'/🟨 and '-'/'_'/'x'/'b'/'0'/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | 'X' | 'x' | 'B' | 'b' | '0' | '⬜' | '⬛' => Some(Self::Unused),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Unused => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count the letters of the answer into 26 counters
    /// 2. First pass: mark exact matches (greens) and consume their counters
    /// 3. Second pass: mark misplaced letters (yellows) from what remains
    /// 4. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_solver::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let target = answer.letters();
        let mut remaining = answer.letter_counts();
        let mut result = [LetterStatus::Unused; WORD_LENGTH];

        // Allow: index pairs guess[i] with target[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                result[i] = LetterStatus::Correct;
                remaining[usize::from(guess[i] - b'a')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            let count = &mut remaining[usize::from(guess[i] - b'a')];
            if *count > 0 {
                result[i] = LetterStatus::Misplaced;
                *count -= 1;
            }
        }

        Self::from_statuses(result)
    }

    /// Encode five per-position statuses
    #[must_use]
    pub const fn from_statuses(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        let mut i = 0;
        while i < WORD_LENGTH {
            pattern += statuses[i].digit() * multiplier;
            // 3^5 overflows u8, so stop multiplying after the last digit
            if i + 1 < WORD_LENGTH {
                multiplier *= 3;
            }
            i += 1;
        }
        Self(pattern)
    }

    /// Decode back into per-position statuses
    #[must_use]
    pub fn statuses(self) -> [LetterStatus; WORD_LENGTH] {
        let mut val = self.0;
        let mut statuses = [LetterStatus::Unused; WORD_LENGTH];
        for status in &mut statuses {
            *status = LetterStatus::from_digit(val % 3);
            val /= 3;
        }
        statuses
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.statuses()
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.statuses()
            .iter()
            .filter(|&&s| s == LetterStatus::Misplaced)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY", "21021" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_solver::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let statuses: Vec<LetterStatus> = s
            .trim()
            .chars()
            .map(LetterStatus::from_char)
            .collect::<Option<_>>()?;
        let statuses: [LetterStatus; WORD_LENGTH] = statuses.try_into().ok()?;
        Some(Self::from_statuses(statuses))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.statuses().iter().map(|s| s.to_emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Feedback for two raw strings
///
/// Validates both inputs before running the codec.
///
/// # Errors
/// Returns `WordError` if either input is not 5 ASCII letters.
pub fn feedback(guess: &str, answer: &str) -> Result<Pattern, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(Pattern::calculate(&guess, &answer))
}
