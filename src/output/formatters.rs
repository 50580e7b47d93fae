//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most a guess could possibly yield
///
/// A guess cannot split `total` candidates into more than
/// `min(total, 243)` groups, so that bounds the entropy.
#[must_use]
pub fn entropy_bar(entropy: f64, total: usize, width: usize) -> String {
    let max_entropy = (total.min(crate::core::Pattern::COUNT) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
