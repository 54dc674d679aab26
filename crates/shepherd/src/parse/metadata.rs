//! Metadata block parsing

use crate::document::{Field, FieldKey, MetadataRecord};

/// Parse the metadata bullet list that follows the title.
///
/// `title_line` is the 1-based line of the H1, so scanning starts on the line
/// after it. Blank lines before and inside the list are tolerated; the list
/// ends at the first non-bullet content line (typically the first `##`
/// section heading).
pub(super) fn parse(lines: &[&str], title_line: usize) -> MetadataRecord {
    parse_from(lines, title_line)
}

/// Parse a standalone metadata bullet list.
///
/// This is the re-parse half of the round-trip law: a record rendered with
/// [`MetadataRecord::to_markdown`] and fed back through here compares equal
/// to the original.
pub fn parse_metadata_block(text: &str) -> MetadataRecord {
    let lines: Vec<&str> = text.lines().collect();
    parse_from(&lines, 0)
}

fn parse_from(lines: &[&str], start: usize) -> MetadataRecord {
    let mut fields: Vec<Field> = Vec::new();
    let mut idx = start;

    while idx < lines.len() {
        let line = lines[idx];

        if line.trim().is_empty() {
            // A blank line only continues the list if another bullet follows.
            let more = lines[idx + 1..]
                .iter()
                .find(|l| !l.trim().is_empty())
                .map(|l| bullet(l).is_some())
                .unwrap_or(false);
            if fields.is_empty() || more {
                idx += 1;
                continue;
            }
            break;
        }

        match bullet(line) {
            Some((0, content)) => match split_field(content) {
                Some((name, value)) => fields.push(Field {
                    key: FieldKey::from_name(name),
                    raw_name: name.to_string(),
                    value: value.to_string(),
                    line: idx + 1,
                    children: Vec::new(),
                }),
                // A top-level bullet without a field name is body content.
                None => break,
            },
            Some((_, content)) => match fields.last_mut() {
                Some(field) => field.children.push(content.to_string()),
                None => break,
            },
            None => break,
        }
        idx += 1;
    }

    let mut record = MetadataRecord::new();
    for field in fields {
        record.push(field);
    }
    record
}

/// Split a bullet line into `(indent, content)`.
fn bullet(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();
    let content = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))?;
    Some((indent, content.trim()))
}

/// Split `Name: value` at the first colon.
///
/// The name side must look like a field name; a colon inside a link target
/// (`[Pitch](https://...)`) does not make a bullet a field.
fn split_field(content: &str) -> Option<(&str, &str)> {
    let colon = content.find(':')?;
    let (name, rest) = content.split_at(colon);
    let name = name.trim();
    if name.is_empty() || name.contains('[') || name.contains(']') {
        return None;
    }
    Some((name, rest[1..].trim()))
}
