//! Token budget configuration.
//!
//! ## The Problem
//!
//! Embedding models have input limits, and retrieval quality degrades when
//! chunks dilute too many topics. Both pressures are expressed in tokens,
//! not bytes, so the chunker budgets against an estimated token count
//! rather than a byte length.
//!
//! A budget has two knobs:
//!
//! - `max_tokens`: the hard ceiling. A chunk's estimated token count never
//!   exceeds it, except when a single unsplittable run of text is itself
//!   larger than the ceiling.
//! - `min_tokens`: a soft floor. Chunks below it are considered too small to
//!   retrieve well. The floor is advisory: heading boundaries and end of
//!   input always flush, even below the floor (see
//!   [`MarkdownChunker`](crate::MarkdownChunker)).
//!
//! ```text
//! max_tokens = 350
//!
//! "## Setup\n\n<long paragraph>..."
//!          ↓
//! Chunk 0: "## Setup\n\n<first ~340 tokens>"   <- context line counted in
//! Chunk 1: "## Setup\n\n<next ~340 tokens>"    <- context re-injected
//! ```

use crate::{Error, Result};

/// Default hard ceiling on estimated tokens per chunk.
pub const DEFAULT_MAX_TOKENS: usize = 350;

/// Default soft floor below which a chunk is considered undersized.
pub const DEFAULT_MIN_TOKENS: usize = 120;

/// Token sizing bounds for chunk assembly.
///
/// # Examples
///
/// ```rust
/// use lintel::TokenBudget;
///
/// // Defaults: ceiling 350, floor 120
/// let budget = TokenBudget::default();
/// assert_eq!(budget.max_tokens(), 350);
/// assert_eq!(budget.min_tokens(), 120);
///
/// // Custom ceiling, no floor
/// let budget = TokenBudget::new(512).unwrap();
/// assert_eq!(budget.max_tokens(), 512);
/// assert_eq!(budget.min_tokens(), 0);
///
/// // A zero ceiling is rejected up front
/// assert!(TokenBudget::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    max_tokens: usize,
    min_tokens: usize,
}

impl TokenBudget {
    /// Create a budget with the given hard ceiling and no soft floor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxTokens`] if `max_tokens` is zero. The
    /// check runs before any text is processed, so an invalid budget never
    /// produces partial output.
    pub fn new(max_tokens: usize) -> Result<Self> {
        if max_tokens == 0 {
            return Err(Error::InvalidMaxTokens);
        }
        Ok(Self {
            max_tokens,
            min_tokens: 0,
        })
    }

    /// Set the soft floor.
    ///
    /// The floor is not validated against the ceiling; a floor above the
    /// ceiling simply never suppresses anything. Keeping `min_tokens`
    /// below `max_tokens` is the caller's responsibility.
    #[must_use]
    pub fn with_min_tokens(self, min_tokens: usize) -> Self {
        Self { min_tokens, ..self }
    }

    /// The hard ceiling on estimated tokens per chunk.
    #[must_use]
    pub const fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// The soft floor below which a chunk counts as undersized.
    #[must_use]
    pub const fn min_tokens(&self) -> usize {
        self.min_tokens
    }

    /// Check if adding `additional` estimated tokens would exceed the ceiling.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max_tokens
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            min_tokens: DEFAULT_MIN_TOKENS,
        }
    }
}
