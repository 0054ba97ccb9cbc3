//! Heading-aware chunk assembly.
//!
//! ## The Algorithm
//!
//! ```text
//! markdown
//!    │  parse_sections
//!    ▼
//! [Heading(1, "Guide"), Text("..."), Heading(2, "Setup"), Text("..."), ...]
//!    │  section by section
//!    ▼
//! heading  -> force-flush buffer, update outline
//! text     -> split into token-bounded segments, then for each segment:
//!               empty buffer?            inject heading-context line
//!               would exceed max_tokens? flush, re-inject context
//!               append segment
//!    │  end of input: flush
//!    ▼
//! [MarkdownChunk { index, content, headings, token_estimate }, ...]
//! ```
//!
//! Two properties fall out of this structure:
//!
//! - A chunk never spans a heading boundary, so its `headings` snapshot is
//!   accurate for all of its text.
//! - When a section is split across chunks, each continuation chunk starts
//!   with the same injected heading lines, so every chunk embeds with its
//!   sectional context even though the source states it only once.
//!
//! ## Segmentation within a section
//!
//! A text section that fits the budget (minus the token cost of the heading
//! context that will share the chunk) passes through whole. An oversized
//! section is split into sentence-like units and repacked greedily; a single
//! sentence that still exceeds the budget falls back to fixed-size character
//! windows of roughly 4 characters per token, never smaller than 50
//! characters. If the heading context alone consumes the whole budget, the
//! text is passed through unsplit rather than sliced into degenerate pieces.

use crate::section::{parse_sections, trim_markdown_whitespace, Section};
use crate::{
    HeuristicEstimator, MarkdownChunk, Outline, PunctuationSplitter, SentenceSplitter,
    TokenBudget, TokenEstimator,
};

/// Minimum width of a fallback character window.
const MIN_FALLBACK_WINDOW: usize = 50;

/// Approximate characters per token, used to size fallback windows.
const CHARS_PER_TOKEN: usize = 4;

/// Splits markdown into token-budgeted, heading-annotated chunks.
///
/// The chunker is a pure function of its input: no state survives a call to
/// [`chunk`](Self::chunk), and a single instance may be shared freely across
/// threads.
///
/// ## Example
///
/// ```rust
/// use lintel::{MarkdownChunker, TokenBudget};
///
/// let budget = TokenBudget::new(100)?;
/// let chunker = MarkdownChunker::new(budget);
///
/// let chunks = chunker.chunk("# Guide\n\nSome introductory text.");
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].headings[0].title, "Guide");
/// # Ok::<(), lintel::Error>(())
/// ```
///
/// Both text heuristics are pluggable:
///
/// ```rust
/// use lintel::{MarkdownChunker, TokenBudget, UnicodeSplitter};
///
/// let chunker = MarkdownChunker::new(TokenBudget::default())
///     .with_splitter(UnicodeSplitter);
/// let chunks = chunker.chunk("Dr. Smith arrived. He left.");
/// # assert_eq!(chunks.len(), 1);
/// ```
pub struct MarkdownChunker {
    budget: TokenBudget,
    estimator: Box<dyn TokenEstimator>,
    splitter: Box<dyn SentenceSplitter>,
}

impl MarkdownChunker {
    /// Create a chunker with the default heuristics for token estimation and
    /// sentence splitting.
    #[must_use]
    pub fn new(budget: TokenBudget) -> Self {
        Self {
            budget,
            estimator: Box::new(HeuristicEstimator),
            splitter: Box::new(PunctuationSplitter),
        }
    }

    /// Replace the token estimator, e.g. with a real tokenizer.
    #[must_use]
    pub fn with_estimator(mut self, estimator: impl TokenEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    /// Replace the sentence splitter.
    #[must_use]
    pub fn with_splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        self.splitter = Box::new(splitter);
        self
    }

    /// The configured token budget.
    #[must_use]
    pub const fn budget(&self) -> TokenBudget {
        self.budget
    }

    /// Chunk a markdown document.
    ///
    /// Returns chunks in source order with contiguous zero-based indices.
    /// Empty input yields an empty sequence.
    #[must_use]
    pub fn chunk(&self, markdown: &str) -> Vec<MarkdownChunk> {
        let mut assembler = Assembler::new(self.estimator.as_ref(), self.budget.min_tokens());

        for section in parse_sections(markdown) {
            match section {
                Section::Heading { level, title } => {
                    // Headings always start fresh context
                    assembler.flush(true);
                    assembler.outline.push(level, title);
                }
                Section::Text { value } => {
                    let segments = self.split_section(&value, assembler.heading_tokens);
                    for segment in segments {
                        self.append_segment(&mut assembler, &segment);
                    }
                }
            }
        }

        assembler.flush(true);
        assembler.chunks
    }

    fn append_segment(&self, assembler: &mut Assembler<'_>, segment: &str) {
        let trimmed = trim_markdown_whitespace(segment);
        if trimmed.is_empty() {
            return;
        }

        let segment_tokens = self.estimator.estimate(&trimmed);
        // Prospective total before any context injection, matching the
        // flush decision to the pre-injection buffer state.
        let total_tokens = assembler.part_tokens + segment_tokens;

        if assembler.part_tokens == 0 {
            assembler.ensure_heading_context();
        }

        if assembler.part_tokens > 0 && total_tokens > self.budget.max_tokens() {
            assembler.flush(true);
            assembler.ensure_heading_context();
        }

        assembler.parts.push(trimmed);
        assembler.part_tokens += segment_tokens;
    }

    /// Break one text section into pieces that each fit the budget once the
    /// anticipated heading-context overhead is accounted for.
    fn split_section(&self, text: &str, heading_tokens: usize) -> Vec<String> {
        if self.estimator.estimate(text) + heading_tokens <= self.budget.max_tokens() {
            return vec![text.to_string()];
        }

        let remaining = self.budget.max_tokens().saturating_sub(heading_tokens);
        let sentences = self.splitter.split(text);
        if sentences.len() <= 1 {
            // The splitter could not usefully subdivide
            return self.fallback_split(text, remaining);
        }

        let mut segments = Vec::new();
        let mut current = String::new();

        for sentence in sentences {
            let candidate = if current.is_empty() {
                sentence.clone()
            } else {
                format!("{current} {sentence}")
            };

            let tokens = self.estimator.estimate(&candidate) + heading_tokens;
            if tokens > self.budget.max_tokens() {
                if current.is_empty() {
                    // A single sentence that alone exceeds the bound
                    segments.extend(self.fallback_split(&sentence, remaining));
                } else {
                    segments.push(std::mem::take(&mut current));
                    current = sentence;
                }
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }

    /// Slice text into fixed-length character windows when no natural
    /// boundary keeps pieces under the budget.
    ///
    /// `max_tokens == 0` (the heading context alone fills the budget)
    /// returns the text unsplit, guaranteeing termination over emitting an
    /// unbounded number of minimum-width slices.
    fn fallback_split(&self, text: &str, max_tokens: usize) -> Vec<String> {
        if max_tokens == 0 {
            return vec![text.to_string()];
        }
        if self.estimator.estimate(text) <= max_tokens {
            return vec![text.to_string()];
        }

        let window = (max_tokens * CHARS_PER_TOKEN).max(MIN_FALLBACK_WINDOW);
        let mut result = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let end = rest
                .char_indices()
                .nth(window)
                .map_or(rest.len(), |(byte_offset, _)| byte_offset);
            result.push(rest[..end].to_string());
            rest = &rest[end..];
        }

        result
    }
}

impl Default for MarkdownChunker {
    fn default() -> Self {
        Self::new(TokenBudget::default())
    }
}

impl std::fmt::Debug for MarkdownChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownChunker")
            .field("budget", &self.budget)
            .finish_non_exhaustive()
    }
}

/// Per-call accumulation state: the growing part buffer, its token total,
/// the outline, and the finished chunks.
struct Assembler<'a> {
    estimator: &'a dyn TokenEstimator,
    min_tokens: usize,
    outline: Outline,
    parts: Vec<String>,
    part_tokens: usize,
    /// Token cost of the context line currently in `parts`, 0 if none.
    heading_tokens: usize,
    /// The last injected context string, for de-duplication.
    last_context: Option<String>,
    chunks: Vec<MarkdownChunk>,
}

impl<'a> Assembler<'a> {
    fn new(estimator: &'a dyn TokenEstimator, min_tokens: usize) -> Self {
        Self {
            estimator,
            min_tokens,
            outline: Outline::new(),
            parts: Vec::new(),
            part_tokens: 0,
            heading_tokens: 0,
            last_context: None,
            chunks: Vec::new(),
        }
    }

    /// Emit the buffered parts as a chunk and reset the buffer.
    ///
    /// A non-forced flush of a buffer below the soft floor is suppressed
    /// once at least one chunk exists. Heading boundaries, overflow, and end
    /// of input all force.
    fn flush(&mut self, force: bool) {
        if self.parts.is_empty() {
            return;
        }
        if !force && self.part_tokens < self.min_tokens && !self.chunks.is_empty() {
            return;
        }

        let content = trim_markdown_whitespace(&self.parts.join("\n\n"));
        self.chunks.push(MarkdownChunk {
            index: self.chunks.len(),
            content,
            headings: self.outline.snapshot(),
            token_estimate: self.part_tokens,
        });

        self.parts.clear();
        self.part_tokens = 0;
        self.heading_tokens = 0;
        self.last_context = None;
    }

    /// Inject the current heading context as the first buffer part, unless
    /// there is no context or the same context was already injected.
    fn ensure_heading_context(&mut self) {
        let Some(context) = self.outline.context_line() else {
            return;
        };
        if self.last_context.as_deref() == Some(context.as_str()) {
            return;
        }

        let estimated = self.estimator.estimate(&context);
        self.parts.push(context.clone());
        self.part_tokens += estimated;
        self.heading_tokens = estimated;
        self.last_context = Some(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadingInfo;

    fn chunker(max_tokens: usize) -> MarkdownChunker {
        MarkdownChunker::new(TokenBudget::new(max_tokens).unwrap())
    }

    #[test]
    fn test_empty_input() {
        assert!(MarkdownChunker::default().chunk("").is_empty());
        assert!(MarkdownChunker::default().chunk("   \n\n  ").is_empty());
    }

    #[test]
    fn test_single_short_paragraph() {
        let chunks = MarkdownChunker::default().chunk("Hello world.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].content, "Hello world.");
        assert!(chunks[0].headings.is_empty());
        assert!(chunks[0].token_estimate >= 1);
    }

    #[test]
    fn test_heading_context_injected() {
        let chunks = MarkdownChunker::default().chunk("# Guide\n\n## Setup\n\nInstall it.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "# Guide\n## Setup\n\nInstall it.");
        assert_eq!(
            chunks[0].headings,
            vec![HeadingInfo::new(1, "Guide"), HeadingInfo::new(2, "Setup")]
        );
    }

    #[test]
    fn test_heading_nesting_snapshots() {
        let chunks = MarkdownChunker::default().chunk("# A\ntext1\n## B\ntext2\n# C\ntext3");
        assert_eq!(chunks.len(), 3);

        assert_eq!(chunks[0].headings, vec![HeadingInfo::new(1, "A")]);
        assert!(chunks[0].content.contains("text1"));

        assert_eq!(
            chunks[1].headings,
            vec![HeadingInfo::new(1, "A"), HeadingInfo::new(2, "B")]
        );
        assert!(chunks[1].content.contains("text2"));

        // Level 1 heading C pops both A and B
        assert_eq!(chunks[2].headings, vec![HeadingInfo::new(1, "C")]);
        assert!(chunks[2].content.contains("text3"));
    }

    #[test]
    fn test_text_before_any_heading() {
        let chunks = MarkdownChunker::default().chunk("preamble text\n\n# Later");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "preamble text");
        assert!(chunks[0].headings.is_empty());
    }

    #[test]
    fn test_index_contiguity() {
        let markdown = "# A\n\none two three\n\n## B\n\nfour five six\n\n# C\n\nseven";
        let chunks = chunker(5).chunk(markdown);
        assert!(chunks.len() > 1);
        for (expected, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, expected);
        }
    }

    #[test]
    fn test_oversized_paragraph_is_split() {
        // One giant "sentence" with no terminators: forces the fixed-size
        // fallback. 5000 chars at max_tokens 50.
        let text = "word ".repeat(1000);
        let chunks = chunker(50).chunk(&text);

        assert!(chunks.len() >= 2, "expected a split, got {}", chunks.len());
        for chunk in &chunks {
            assert!(!chunk.content.is_empty());
            assert!(
                chunk.token_estimate <= 50,
                "chunk {} over budget: {}",
                chunk.index,
                chunk.token_estimate
            );
        }
    }

    #[test]
    fn test_sentence_packing_respects_budget() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let chunks = chunker(30).chunk(&text);

        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.token_estimate <= 30);
            // Sentence boundaries survive: every chunk ends at a terminator
            assert!(chunk.content.ends_with('.'), "truncated: {:?}", chunk.content);
        }
    }

    #[test]
    fn test_context_repeated_across_continuation_chunks() {
        let body = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let markdown = format!("## Reference\n\n{body}");
        let chunks = chunker(40).chunk(&markdown);

        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(
                chunk.content.starts_with("## Reference"),
                "missing context in chunk {}: {:?}",
                chunk.index,
                &chunk.content[..chunk.content.len().min(40)]
            );
            assert_eq!(chunk.headings, vec![HeadingInfo::new(2, "Reference")]);
        }
    }

    #[test]
    fn test_soft_floor_does_not_suppress_heading_flush() {
        // Both chunks are far below the floor; heading boundaries flush anyway.
        let budget = TokenBudget::new(350).unwrap().with_min_tokens(120);
        let chunks = MarkdownChunker::new(budget).chunk("# A\n\ntiny\n\n# B\n\nalso tiny");

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].token_estimate < 120);
        assert!(chunks[1].token_estimate < 120);
    }

    #[test]
    fn test_final_flush_ignores_soft_floor() {
        let budget = TokenBudget::new(350).unwrap().with_min_tokens(120);
        let chunks = MarkdownChunker::new(budget).chunk("just a few words");
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_heading_only_document() {
        // Headings with no text never fill the buffer, so nothing is emitted.
        let chunks = MarkdownChunker::default().chunk("# A\n\n## B\n\n### C");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_blank_lines_collapse() {
        let chunks = MarkdownChunker::default().chunk("para one\n\n\n\npara two");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "para one\n\npara two");
    }

    #[test]
    fn test_multibyte_fallback_slicing() {
        // Fallback windows must not split multi-byte characters
        let text = "日本語のテキスト".repeat(400);
        let chunks = chunker(20).chunk(&text);
        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(!chunk.content.is_empty());
        }
    }

    #[test]
    fn test_token_estimate_matches_parts_sum() {
        let chunks = MarkdownChunker::default().chunk("# H\n\nsome body text here");
        assert_eq!(chunks.len(), 1);
        let est = HeuristicEstimator;
        let expected = est.estimate("# H") + est.estimate("some body text here");
        assert_eq!(chunks[0].token_estimate, expected);
    }
}
