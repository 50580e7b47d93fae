//! Feedback pattern lookup
//!
//! [`PatternSource`] abstracts "what pattern does guess `g` produce against
//! answer `a`" over dictionary indices. The dictionary answers it by running
//! the codec; [`PatternTable`] answers it from a dense precomputed matrix.
//! Both must agree on every pair.

use crate::core::{Dictionary, Pattern};
use rayon::prelude::*;
use std::time::Instant;

/// Pattern lookup by dictionary index
pub trait PatternSource: Sync {
    /// Pattern produced by guessing word `guess` when word `answer` is the secret
    fn pattern(&self, guess: usize, answer: usize) -> Pattern;

    /// Number of words addressable by index
    fn word_count(&self) -> usize;
}

impl PatternSource for Dictionary {
    #[inline]
    fn pattern(&self, guess: usize, answer: usize) -> Pattern {
        Pattern::calculate(self.word(guess), self.word(answer))
    }

    #[inline]
    fn word_count(&self) -> usize {
        self.len()
    }
}

/// Dense guess × answer matrix of pattern codes
///
/// Row-major: the row is the guess index, the column the answer index.
/// Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PatternTable {
    size: usize,
    codes: Vec<u8>,
}

impl PatternTable {
    /// Compute every pattern of the dictionary, one row per rayon task
    #[must_use]
    pub fn build(dictionary: &Dictionary) -> Self {
        let start = Instant::now();
        let size = dictionary.len();
        let words = dictionary.words();
        let mut codes = vec![0u8; size * size];

        if size > 0 {
            codes
                .par_chunks_mut(size)
                .zip(words.par_iter())
                .for_each(|(row, guess)| {
                    for (cell, answer) in row.iter_mut().zip(words) {
                        *cell = Pattern::calculate(guess, answer).value();
                    }
                });
        }

        log::info!(
            "Built {size}x{size} pattern table ({} KiB) in {:.2?}",
            codes.len() / 1024,
            start.elapsed()
        );

        Self { size, codes }
    }

    /// Side length of the matrix
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All patterns of one guess, indexed by answer
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        &self.codes[guess * self.size..(guess + 1) * self.size]
    }
}

impl PatternSource for PatternTable {
    #[inline]
    fn pattern(&self, guess: usize, answer: usize) -> Pattern {
        Pattern::new(self.codes[guess * self.size + answer])
    }

    #[inline]
    fn word_count(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words_lenient([
            "abide", "speed", "crane", "adieu", "stone", "eerie", "robin", "geese", "creep",
        ])
        .unwrap()
    }

    #[test]
    fn table_matches_codec_on_every_pair() {
        let dict = dictionary();
        let table = PatternTable::build(&dict);

        assert_eq!(table.size(), dict.len());
        assert_eq!(table.word_count(), dict.word_count());
        for guess in 0..dict.len() {
            for answer in 0..dict.len() {
                assert_eq!(
                    table.pattern(guess, answer),
                    dict.pattern(guess, answer),
                    "mismatch for {} vs {}",
                    dict.word(guess),
                    dict.word(answer)
                );
            }
        }
    }

    #[test]
    fn diagonal_is_perfect() {
        let dict = dictionary();
        let table = PatternTable::build(&dict);

        for i in 0..dict.len() {
            assert!(table.pattern(i, i).is_perfect());
        }
    }

    #[test]
    fn row_exposes_one_guess() {
        let dict = dictionary();
        let table = PatternTable::build(&dict);

        let row = table.row(1);
        assert_eq!(row.len(), dict.len());
        assert_eq!(row[0], dict.pattern(1, 0).value());
    }
}
