//! Implemented proposals must reference their implementation

use crate::context::ValidationContext;
use crate::document::{Document, FieldKey};
use crate::report::{Diagnostic, Violation};
use crate::status::Status;

use super::Rule;

/// A proposal marked `Implemented (...)` must carry an `Implementation`
/// field pointing at the change that shipped it.
pub struct ImplementedHasImplementation;

impl Rule for ImplementedHasImplementation {
    fn name(&self) -> &'static str {
        "implemented-has-implementation"
    }

    fn check(&self, doc: &Document, _ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        let Some(value) = doc.status() else {
            return;
        };
        if value.status != Status::Implemented {
            return;
        }
        if doc.metadata.contains(&FieldKey::Implementation) {
            return;
        }
        let line = doc.metadata.get(&FieldKey::Status).map(|f| f.line);
        let mut diagnostic = Diagnostic::error(
            Violation::MissingMetadata,
            "required field 'Implementation' is missing for an implemented proposal",
        );
        if let Some(line) = line {
            diagnostic = diagnostic.at_line(line);
        }
        out.push(diagnostic);
    }
}
