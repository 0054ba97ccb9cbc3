//! Line-oriented decomposition of markdown into headings and text blocks.
//!
//! This is deliberately not a markdown parser. The chunker only needs to
//! know where ATX headings are; everything else (lists, code fences, tables,
//! setext headings) passes through as plain text. A line is a heading when
//! the right-trimmed line starts with 1 to 6 `#` characters followed by at
//! least one whitespace character; anything else is text.

/// A markdown document decomposed at heading boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Section {
    /// An ATX heading line.
    Heading {
        /// Number of leading `#` characters, 1 through 6.
        level: u8,
        /// Remainder of the line, trimmed. May be empty.
        title: String,
    },
    /// A run of consecutive non-blank, non-heading lines, trimmed.
    Text {
        /// The block text. Never empty.
        value: String,
    },
}

/// Split markdown into an ordered sequence of heading and text sections.
///
/// Consecutive non-heading, non-blank lines accumulate into one text
/// section; blank lines and headings flush the accumulation. Blocks that
/// trim to nothing are dropped, so every emitted text section is non-empty.
pub(crate) fn parse_sections(markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for raw in markdown.split('\n') {
        let line = raw.trim_end();

        if let Some((level, title)) = parse_heading(line) {
            flush_text(&mut sections, &mut pending);
            sections.push(Section::Heading {
                level,
                title: title.to_string(),
            });
        } else if line.trim().is_empty() {
            flush_text(&mut sections, &mut pending);
        } else {
            pending.push(line);
        }
    }

    flush_text(&mut sections, &mut pending);
    sections
}

fn flush_text(sections: &mut Vec<Section>, pending: &mut Vec<&str>) {
    if pending.is_empty() {
        return;
    }
    let combined = trim_markdown_whitespace(&pending.join("\n"));
    if !combined.is_empty() {
        sections.push(Section::Text { value: combined });
    }
    pending.clear();
}

/// Match `^#{1,6}\s+(.*)$` against a right-trimmed line.
///
/// Leading whitespace disqualifies a heading, and so does a missing
/// separator (`#hash-tag`) or more than six hashes.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

/// Right-trim every line, then trim leading and trailing blank space from
/// the whole block.
pub(crate) fn trim_markdown_whitespace(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, title: &str) -> Section {
        Section::Heading {
            level,
            title: title.to_string(),
        }
    }

    fn text(value: &str) -> Section {
        Section::Text {
            value: value.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("   \n\n\t\n").is_empty());
    }

    #[test]
    fn test_headings_and_text() {
        let sections = parse_sections("# Title\n\nIntro text.\n\n## Sub\nMore.");
        assert_eq!(
            sections,
            vec![
                heading(1, "Title"),
                text("Intro text."),
                heading(2, "Sub"),
                text("More."),
            ]
        );
    }

    #[test]
    fn test_blank_line_separates_blocks() {
        let sections = parse_sections("one\ntwo\n\nthree");
        assert_eq!(sections, vec![text("one\ntwo"), text("three")]);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(parse_sections("###### Six"), vec![heading(6, "Six")]);
        // Seven hashes is not a heading
        assert_eq!(
            parse_sections("####### Seven"),
            vec![text("####### Seven")]
        );
    }

    #[test]
    fn test_heading_requires_separator() {
        assert_eq!(parse_sections("#hashtag"), vec![text("#hashtag")]);
        assert_eq!(parse_sections("#\tTab"), vec![heading(1, "Tab")]);
    }

    #[test]
    fn test_indented_hash_is_text() {
        // Indentation disqualifies the heading; the block trim then strips it.
        assert_eq!(parse_sections("  # Not a heading"), vec![text("# Not a heading")]);
    }

    #[test]
    fn test_empty_title_heading() {
        assert_eq!(parse_sections("# "), vec![heading(1, "")]);
    }

    #[test]
    fn test_crlf_lines() {
        let sections = parse_sections("# Title\r\nbody line\r\n");
        assert_eq!(sections, vec![heading(1, "Title"), text("body line")]);
    }

    #[test]
    fn test_inner_indentation_preserved() {
        // The block trim strips the first line's indent but keeps inner ones.
        let sections = parse_sections("    indented code\n    more code");
        assert_eq!(sections, vec![text("indented code\n    more code")]);
    }

    #[test]
    fn test_trailing_buffer_flushed() {
        let sections = parse_sections("tail without newline");
        assert_eq!(sections, vec![text("tail without newline")]);
    }

    #[test]
    fn test_trim_markdown_whitespace() {
        assert_eq!(trim_markdown_whitespace("  a  \nb\t\n\n"), "a\nb");
        assert_eq!(trim_markdown_whitespace("\n\n"), "");
    }
}
