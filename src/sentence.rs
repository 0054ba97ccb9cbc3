//! Sentence splitting heuristics.
//!
//! When a paragraph exceeds the token budget, the chunker repacks it at
//! sentence granularity. Sentence detection is famously messy:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     abbreviations, not sentence ends
//! ```
//!
//! The default [`PunctuationSplitter`] does not try to be clever. It ends a
//! piece at any run of end-of-sentence punctuation (ASCII or full-width
//! period, exclamation mark, question mark) or at a run of newlines, keeping
//! the punctuation with the piece. It over-splits on abbreviations and
//! decimal numbers; for packing purposes that only costs a slightly earlier
//! chunk boundary, never lost text.
//!
//! [`UnicodeSplitter`] uses UAX #29 sentence segmentation instead, which
//! handles most abbreviation and ellipsis cases. Both implement the same
//! trait, so callers pick per document kind.

use unicode_segmentation::UnicodeSegmentation;

/// Strategy for splitting a text block into sentence-like units.
///
/// Implementations return trimmed, non-empty pieces in source order. They
/// are heuristics, not linguistic boundary detectors.
pub trait SentenceSplitter: Send + Sync {
    /// Split `text` into sentence-like pieces.
    fn split(&self, text: &str) -> Vec<String>;
}

/// End-of-sentence punctuation recognized by [`PunctuationSplitter`]:
/// ASCII and full-width period, exclamation mark, and question mark.
const TERMINATORS: [char; 7] = ['.', '。', '．', '!', '！', '?', '？'];

fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// The default punctuation-run splitter.
///
/// ## Example
///
/// ```rust
/// use lintel::{PunctuationSplitter, SentenceSplitter};
///
/// let pieces = PunctuationSplitter.split("One. Two! Three?");
/// assert_eq!(pieces, ["One.", "Two!", "Three?"]);
///
/// // Newline runs also terminate pieces
/// let pieces = PunctuationSplitter.split("alpha\nbeta");
/// assert_eq!(pieces, ["alpha", "beta"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl SentenceSplitter for PunctuationSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if is_terminator(c) {
                // Consume the whole punctuation run into this piece
                current.push(c);
                while let Some(&next) = chars.peek() {
                    if !is_terminator(next) {
                        break;
                    }
                    current.push(next);
                    chars.next();
                }
                push_piece(&mut pieces, &mut current);
            } else if c == '\n' {
                while chars.peek() == Some(&'\n') {
                    chars.next();
                }
                push_piece(&mut pieces, &mut current);
            } else {
                current.push(c);
            }
        }

        push_piece(&mut pieces, &mut current);
        pieces
    }
}

fn push_piece(pieces: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_string());
    }
    current.clear();
}

/// UAX #29 sentence segmentation via `unicode-segmentation`.
///
/// Handles abbreviations ("Dr."), decimal numbers (3.14), and ellipses
/// better than the punctuation heuristic, at the cost of occasionally
/// grouping what a human would call two sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSplitter;

impl SentenceSplitter for UnicodeSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
