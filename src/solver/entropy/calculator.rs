//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::Pattern;
use crate::solver::table::PatternSource;

/// Bucket sizes of the partition a guess induces, indexed by pattern code
pub type Histogram = [u32; Pattern::COUNT];

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Partition `candidates` by the pattern `guess` produces against each
#[must_use]
pub fn pattern_histogram<P: PatternSource + ?Sized>(
    source: &P,
    guess: usize,
    candidates: &[usize],
) -> Histogram {
    let mut counts = [0u32; Pattern::COUNT];
    for &answer in candidates {
        counts[usize::from(source.pattern(guess, answer).value())] += 1;
    }
    counts
}

/// Calculate Shannon entropy from bucket sizes
///
/// H = -Σ p * log₂(p), over nonempty buckets only.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one bucket holds everything)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n nonempty buckets
///
/// # Examples
/// ```
/// use wordle_entropy_solver::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 0, 25, 25]);
/// assert!((entropy - 2.0).abs() < 1e-9); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain in bits of guessing `guess` against `candidates`
#[must_use]
pub fn calculate_entropy<P: PatternSource + ?Sized>(
    source: &P,
    guess: usize,
    candidates: &[usize],
) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&pattern_histogram(source, guess, candidates))
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics<P: PatternSource + ?Sized>(
    source: &P,
    guess: usize,
    candidates: &[usize],
) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = pattern_histogram(source, guess, candidates);
    let total = candidates.len() as f64;

    // Σ p_k · |bucket_k|: the size of the set we expect to be left with
    let expected_remaining = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| f64::from(c) * f64::from(c) / total)
        .sum();

    let max_partition = counts.iter().copied().max().unwrap_or(0) as usize;

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words_lenient(words.iter().copied()).unwrap()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy(&[1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy(&[0, 10, 0]);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = shannon_entropy(&[25, 25, 25, 25]);
        let skewed = shannon_entropy(&[97, 1, 1, 1]);
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_bounds() {
        let counts = [10, 20, 30];
        let entropy = shannon_entropy(&counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0; Pattern::COUNT]).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_sums_to_candidate_count() {
        let dict = dictionary(&["crane", "slate", "irate", "trace", "raise"]);
        let candidates: Vec<usize> = (0..dict.len()).collect();

        let counts = pattern_histogram(&dict, 0, &candidates);
        assert_eq!(counts.iter().sum::<u32>(), 5);
        assert_eq!(counts[usize::from(Pattern::PERFECT.value())], 1);
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let dict = dictionary(&["zzzzz", "aaaaa", "bbbbb", "ccccc"]);
        let entropy = calculate_entropy(&dict, 0, &[1, 2, 3]);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let dict = dictionary(&["slate", "zzzzz"]);
        let entropy = calculate_entropy(&dict, 0, &[0, 1]);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let dict = dictionary(&["crane"]);
        assert!(calculate_entropy(&dict, 0, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_for_perfect_split() {
        let dict = dictionary(&["slate", "zzzzz"]);
        let metrics = calculate_metrics(&dict, 0, &[0, 1]);

        assert!((metrics.entropy - 1.0).abs() < 1e-9);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 1);
    }

    #[test]
    fn metrics_for_no_information() {
        let dict = dictionary(&["zzzzz", "aaaaa", "bbbbb", "ccccc"]);
        let metrics = calculate_metrics(&dict, 0, &[1, 2, 3]);

        assert!(metrics.entropy.abs() < 1e-9);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 3);
    }
}
