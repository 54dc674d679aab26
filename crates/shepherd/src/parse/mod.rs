//! Document parsing
//!
//! Turns raw Markdown text into a [`Document`]. Parsing is a pure,
//! single-pass scan over the lines of the file: no I/O, no side effects, and
//! parsing the same text twice yields identical documents.
//!
//! Structural failure (no H1 title) is the only way parsing can fail. A
//! missing metadata block is not a parse failure; the document simply carries
//! an empty record and the rules report it.

mod links;
mod metadata;
mod sections;
mod title;

pub use metadata::parse_metadata_block;

use crate::document::Document;
use crate::error::StructureError;

/// Parse one proposal document.
///
/// `source` is the display name used in diagnostics, usually the file path.
pub fn parse_document(
    source: impl Into<String>,
    text: &str,
) -> Result<Document, StructureError> {
    let lines: Vec<&str> = text.lines().collect();

    let title = title::parse(&lines)?;
    let metadata = metadata::parse(&lines, title.line);
    let (sections, extra_title_lines) = sections::parse(&lines, title.line);
    let links = links::extract(&lines);

    Ok(Document {
        source: source.into(),
        title,
        metadata,
        sections,
        links,
        extra_title_lines,
    })
}

/// Whether a line opens or closes a fenced code block.
///
/// Proposals embed illustrative code samples; headings and links inside a
/// fence are sample text, not document structure.
pub(crate) fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Parse an ATX heading at column zero: `(level, text)`.
pub(crate) fn heading(line: &str) -> Option<(u8, &str)> {
    let mut rest = line.strip_prefix('#')?;
    let mut level: u8 = 1;
    while let Some(deeper) = rest.strip_prefix('#') {
        level += 1;
        rest = deeper;
    }
    let text = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('\t'))?;
    Some((level, text.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        assert_eq!(heading("# Title"), Some((1, "Title")));
        assert_eq!(heading("## Motivation"), Some((2, "Motivation")));
        assert_eq!(heading("#NoSpace"), None);
        assert_eq!(heading("plain text"), None);
        assert_eq!(heading("  # indented"), None);
    }

    #[test]
    fn test_is_fence() {
        assert!(is_fence("```swift"));
        assert!(is_fence("~~~"));
        assert!(!is_fence("code"));
    }
}
