//! Duplicate field detection

use crate::context::ValidationContext;
use crate::document::Document;
use crate::report::{Diagnostic, Violation};

use super::Rule;

/// Each canonical field should be declared once; extras get a warning.
///
/// Synonyms count as the same field, so `Author` followed by `Authors` is a
/// duplicate even though the spellings differ.
pub struct DuplicateFields;

impl Rule for DuplicateFields {
    fn name(&self) -> &'static str {
        "duplicate-fields"
    }

    fn check(&self, doc: &Document, _ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        for key in doc.metadata.keys() {
            let occurrences = doc.metadata.get_all(key);
            let Some((first, extras)) = occurrences.split_first() else {
                continue;
            };
            for extra in extras {
                out.push(
                    Diagnostic::warn(
                        Violation::DuplicateField,
                        format!(
                            "duplicate field '{}' (first declared on line {})",
                            key.canonical_name(),
                            first.line
                        ),
                    )
                    .at_line(extra.line),
                );
            }
        }
    }
}
