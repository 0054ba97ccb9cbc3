//! # lintel
//!
//! Heading-aware markdown chunking for retrieval-augmented generation (RAG)
//! pipelines.
//!
//! ## The Problem
//!
//! Documentation sites feed their pages to an embedding model so a chat
//! widget can retrieve relevant passages. Embedding a whole page dilutes the
//! vector; embedding arbitrary fixed-size windows orphans text from the
//! section it belongs to. A passage under `## Configuration` retrieved
//! without that heading is much harder to rank and display.
//!
//! This crate splits markdown into token-budgeted chunks that keep their
//! sectional context:
//!
//! - Chunks never span a heading boundary.
//! - Each chunk carries the heading breadcrumb active at its position,
//!   both as structured metadata and, when a section is split across
//!   chunks, as heading lines injected at the top of the chunk text.
//! - Oversized paragraphs are repacked at sentence granularity, with a
//!   fixed-size character fallback for text with no usable boundaries.
//!
//! ```text
//! # Guide
//! ## Setup
//! <two pages of prose...>
//!          │
//!          ▼
//! Chunk 0: "# Guide\n## Setup\n\n<first ~350 tokens>"   headings: [Guide, Setup]
//! Chunk 1: "# Guide\n## Setup\n\n<next ~350 tokens>"    headings: [Guide, Setup]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let markdown = "# Guide\n\n## Install\n\nRun the installer.\n\n## Use\n\nStart it.";
//! let chunks = lintel::chunk_markdown(markdown);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].breadcrumb(), "Guide > Install");
//! assert_eq!(chunks[1].breadcrumb(), "Guide > Use");
//! ```
//!
//! Custom budgets and strategies:
//!
//! ```rust
//! use lintel::{MarkdownChunker, TokenBudget, UnicodeSplitter};
//!
//! let budget = TokenBudget::new(512)?.with_min_tokens(64);
//! let chunker = MarkdownChunker::new(budget).with_splitter(UnicodeSplitter);
//! let chunks = chunker.chunk("Some prose. More prose.");
//! # assert_eq!(chunks.len(), 1);
//! # Ok::<(), lintel::Error>(())
//! ```
//!
//! ## What This Is Not
//!
//! The token estimate is a deterministic heuristic (roughly 4 characters per
//! token averaged with a word count), not a tokenizer; plug a real one in
//! through [`TokenEstimator`] when exact counts matter. Likewise the crate
//! makes no semantic claims: chunk boundaries are structural (headings,
//! sentences, character windows), not topical. Embedding, storage, and
//! retrieval live in the calling pipeline.
//!
//! The whole pass is a pure synchronous text transform: no I/O, no shared
//! state, linear in input size, safe to run concurrently over many documents
//! without coordination.

mod budget;
mod chunk;
mod chunker;
mod error;
mod estimate;
mod outline;
mod section;
mod sentence;

pub use budget::{TokenBudget, DEFAULT_MAX_TOKENS, DEFAULT_MIN_TOKENS};
pub use chunk::{HeadingInfo, MarkdownChunk};
pub use chunker::MarkdownChunker;
pub use error::{Error, Result};
pub use estimate::{HeuristicEstimator, TokenEstimator};
pub use sentence::{PunctuationSplitter, SentenceSplitter, UnicodeSplitter};

pub(crate) use outline::Outline;

/// Chunk a markdown document with the default budget and heuristics.
///
/// Equivalent to `MarkdownChunker::new(TokenBudget::default()).chunk(markdown)`:
/// a 350-token ceiling, the punctuation sentence splitter, and the
/// character/word token estimator.
///
/// ```rust
/// let chunks = lintel::chunk_markdown("Hello world.");
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].content, "Hello world.");
/// ```
#[must_use]
pub fn chunk_markdown(markdown: &str) -> Vec<MarkdownChunk> {
    MarkdownChunker::default().chunk(markdown)
}
