//! Error types for lintel.

/// Errors that can occur while configuring the chunker.
///
/// The chunking pass itself is infallible: once a [`crate::TokenBudget`] has
/// been validated, every input string produces a (possibly empty) chunk
/// sequence. Malformed markdown is not an error: anything that does not
/// match the heading pattern is treated as plain text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The hard token ceiling must be greater than zero.
    #[error("invalid max_tokens: 0 (must be > 0)")]
    InvalidMaxTokens,
}

/// Result type for lintel operations.
pub type Result<T> = std::result::Result<T, Error>;
