//! Token estimation heuristics.
//!
//! Chunk sizing decisions need a token count, but running a real tokenizer
//! per candidate segment is expensive and ties the library to one model's
//! vocabulary. A cheap deterministic proxy is enough: it only has to be
//! consistent, so that the same input always packs the same way.
//!
//! The default heuristic averages two crude signals:
//!
//! ```text
//! estimate = round((chars / 4 + words) / 2), floored at 1
//! ```
//!
//! English prose averages roughly 4 characters per token, and whitespace
//! word counts under-count subword splits; averaging the two lands close
//! enough for budgeting. Swap in a real tokenizer through the trait when
//! exact counts matter.

/// Strategy for estimating the model-token count of a string.
///
/// Implementations must be deterministic. They are not expected to match any
/// specific model's tokenizer.
pub trait TokenEstimator: Send + Sync {
    /// Estimate the number of tokens in `text`.
    ///
    /// Empty or all-whitespace input estimates to 0; any other input
    /// estimates to at least 1.
    fn estimate(&self, text: &str) -> usize;
}

/// The default character/word-count heuristic.
///
/// ## Example
///
/// ```rust
/// use lintel::{HeuristicEstimator, TokenEstimator};
///
/// let estimator = HeuristicEstimator;
/// assert_eq!(estimator.estimate(""), 0);
/// assert_eq!(estimator.estimate("   \n"), 0);
/// assert!(estimator.estimate("Hello world.") >= 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

impl TokenEstimator for HeuristicEstimator {
    fn estimate(&self, text: &str) -> usize {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            return 0;
        }
        let char_estimate = cleaned.chars().count() as f64 / 4.0;
        let word_estimate = cleaned.split_whitespace().count() as f64;
        let estimate = ((char_estimate + word_estimate) / 2.0).round() as usize;
        estimate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(HeuristicEstimator.estimate(""), 0);
        assert_eq!(HeuristicEstimator.estimate("  \t\n "), 0);
    }

    #[test]
    fn test_floor_of_one() {
        assert_eq!(HeuristicEstimator.estimate("a"), 1);
    }

    #[test]
    fn test_short_sentence() {
        // 12 chars / 4 = 3.0, 2 words -> round(2.5) = 3
        assert_eq!(HeuristicEstimator.estimate("Hello world."), 3);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(
            HeuristicEstimator.estimate("  Hello world.  "),
            HeuristicEstimator.estimate("Hello world.")
        );
    }

    #[test]
    fn test_monotonic_on_repetition() {
        let short = "word ".repeat(10);
        let long = "word ".repeat(100);
        assert!(HeuristicEstimator.estimate(&long) > HeuristicEstimator.estimate(&short));
    }
}
