//! Title extraction

use crate::document::Title;
use crate::error::StructureError;

use super::heading;

/// Find the document's H1 title.
///
/// The first non-blank line must be an H1; anything else is a structural
/// failure for the whole file.
pub(super) fn parse(lines: &[&str]) -> Result<Title, StructureError> {
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        return match heading(line) {
            Some((1, text)) => Ok(Title {
                text: text.to_string(),
                line: idx + 1,
            }),
            _ => Err(StructureError::MissingTitle),
        };
    }
    Err(StructureError::EmptyDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_after_blank_lines() {
        let lines = vec!["", "", "# Remove Currying"];
        let title = parse(&lines).unwrap();
        assert_eq!(title.text, "Remove Currying");
        assert_eq!(title.line, 3);
    }

    #[test]
    fn test_missing_title() {
        let lines = vec!["just prose"];
        assert_eq!(parse(&lines), Err(StructureError::MissingTitle));
    }

    #[test]
    fn test_empty_document() {
        let lines: Vec<&str> = vec!["", "  "];
        assert_eq!(parse(&lines), Err(StructureError::EmptyDocument));
    }
}
