//! Body section extraction

use crate::document::Section;

use super::{heading, is_fence};

/// Collect body section headings and any H1s beyond the title.
///
/// Returns `(sections, extra_title_lines)`. Headings inside fenced code
/// blocks are sample text and are skipped.
pub(super) fn parse(lines: &[&str], title_line: usize) -> (Vec<Section>, Vec<usize>) {
    let mut sections = Vec::new();
    let mut extra_titles = Vec::new();
    let mut in_fence = false;

    for (idx, line) in lines.iter().enumerate() {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some((level, text)) = heading(line) else {
            continue;
        };
        let line_no = idx + 1;
        if level == 1 {
            if line_no != title_line {
                extra_titles.push(line_no);
            }
        } else {
            sections.push(Section {
                heading: text.to_string(),
                level,
                line: line_no,
            });
        }
    }

    (sections, extra_titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let lines = vec![
            "# Title",
            "",
            "## Introduction",
            "prose",
            "## Motivation",
            "### Details",
        ];
        let (sections, extras) = parse(&lines, 1);
        let headings: Vec<&str> = sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Introduction", "Motivation", "Details"]);
        assert_eq!(sections[2].level, 3);
        assert!(extras.is_empty());
    }

    #[test]
    fn test_headings_in_fences_ignored() {
        let lines = vec!["# Title", "```", "# not a heading", "## nor this", "```"];
        let (sections, extras) = parse(&lines, 1);
        assert!(sections.is_empty());
        assert!(extras.is_empty());
    }

    #[test]
    fn test_extra_titles_reported() {
        let lines = vec!["# Title", "## Introduction", "# Title again"];
        let (_, extras) = parse(&lines, 1);
        assert_eq!(extras, vec![3]);
    }
}
