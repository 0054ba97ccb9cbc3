//! Output types: chunks and the heading markers they carry.

/// One markdown heading marker (`#` through `######`).
///
/// Captured while scanning the document and stored as a snapshot inside each
/// emitted [`MarkdownChunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    /// Heading depth, 1 through 6.
    pub level: u8,
    /// Heading title with surrounding whitespace trimmed. May be empty
    /// (e.g. a line consisting of `"# "`).
    pub title: String,
}

impl HeadingInfo {
    /// Create a heading marker.
    #[must_use]
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
        }
    }

    /// Render this heading as a markdown heading line, e.g. `"## Setup"`.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format!("{} {}", "#".repeat(usize::from(self.level)), self.title)
    }
}

impl std::fmt::Display for HeadingInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_markdown())
    }
}

/// A bounded-size slice of source markdown plus its heading breadcrumb.
///
/// Chunks are what gets handed to a downstream embedding function: the
/// `content` is embedded, and the breadcrumb is typically persisted alongside
/// the vector so retrieval results can show where in the document they came
/// from.
///
/// ## Invariants
///
/// - `index` values are zero-based, contiguous, and follow source order.
/// - `content` is non-empty and carries no leading or trailing blank lines.
/// - `headings` is the heading stack active when the chunk was flushed,
///   outermost first. It is metadata: the same context may also appear as an
///   injected heading line at the start of `content`, but the two are
///   independent.
///
/// ## Example
///
/// ```rust
/// let chunks = lintel::chunk_markdown("# Guide\n\n## Setup\n\nInstall it.");
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].breadcrumb(), "Guide > Setup");
/// assert_eq!(chunks[0].headings[1].level, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownChunk {
    /// Zero-based position of this chunk in the output sequence.
    pub index: usize,
    /// The chunk text, including any injected heading-context line.
    pub content: String,
    /// Snapshot of the heading stack at flush time, outermost to innermost.
    pub headings: Vec<HeadingInfo>,
    /// Estimated token count of `content`, per the configured estimator.
    pub token_estimate: usize,
}

impl MarkdownChunk {
    /// The heading titles joined with `" > "`, for display or storage
    /// alongside the embedded content. Empty when no heading was in scope.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        self.headings
            .iter()
            .map(|h| h.title.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    /// The length of the chunk content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the chunk content is empty. Emitted chunks never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for MarkdownChunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MarkdownChunk {{ index: {}, headings: [{}], tokens: {} }}",
            self.index,
            self.breadcrumb(),
            self.token_estimate
        )
    }
}
