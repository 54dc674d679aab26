//! Required metadata fields

use crate::context::ValidationContext;
use crate::document::{Document, FieldKey};
use crate::report::{Diagnostic, Violation};

use super::Rule;

const REQUIRED: &[FieldKey] = &[FieldKey::Proposal, FieldKey::Authors, FieldKey::Status];

/// `Proposal`, `Authors`, and `Status` must be present; `Authors` must not
/// be empty.
pub struct RequiredFields;

impl Rule for RequiredFields {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn check(&self, doc: &Document, _ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        // A document with no metadata block at all gets exactly one finding,
        // not one per missing field.
        if doc.metadata.is_empty() {
            out.push(
                Diagnostic::error(Violation::MissingMetadata, "metadata block is missing")
                    .at_line(doc.title.line),
            );
            return;
        }

        for key in REQUIRED {
            if !doc.metadata.contains(key) {
                out.push(Diagnostic::error(
                    Violation::MissingMetadata,
                    format!("required field '{}' is missing", key.canonical_name()),
                ));
            }
        }

        if let Some(authors) = doc.metadata.get(&FieldKey::Authors) {
            if authors.value.is_empty() && authors.children.is_empty() {
                out.push(
                    Diagnostic::error(Violation::EmptyAuthors, "field 'Authors' is empty")
                        .at_line(authors.line),
                );
            }
        }
    }
}
