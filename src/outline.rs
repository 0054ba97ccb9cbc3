//! Heading stack: a simplified outline of the document being scanned.

use crate::HeadingInfo;

/// The nesting-aware sequence of headings in scope at a point in the scan.
///
/// Pushing a heading of level L first pops every entry with level >= L, so
/// adjacent entries always strictly increase in level. A new `# H1` therefore
/// clears the whole stack, and a sibling `## B` replaces the previous `## A`
/// along with anything under it.
#[derive(Debug, Clone, Default)]
pub(crate) struct Outline {
    stack: Vec<HeadingInfo>,
}

impl Outline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Apply the strict-nesting rule and push the new heading.
    pub(crate) fn push(&mut self, level: u8, title: String) {
        while self
            .stack
            .last()
            .is_some_and(|heading| heading.level >= level)
        {
            self.stack.pop();
        }
        self.stack.push(HeadingInfo::new(level, title));
    }

    /// Clone the current stack, outermost to innermost.
    pub(crate) fn snapshot(&self) -> Vec<HeadingInfo> {
        self.stack.clone()
    }

    /// Render the stack as markdown heading lines joined by newlines, for
    /// injection at the start of a chunk buffer. `None` when no heading has
    /// been seen.
    pub(crate) fn context_line(&self) -> Option<String> {
        if self.stack.is_empty() {
            return None;
        }
        Some(
            self.stack
                .iter()
                .map(HeadingInfo::to_markdown)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
