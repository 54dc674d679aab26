//! Status vocabulary check

use crate::context::ValidationContext;
use crate::document::{Document, FieldKey};
use crate::report::{Diagnostic, Violation};
use crate::status::Status;

use super::Rule;

/// The `Status` token must belong to the known lifecycle vocabulary.
///
/// Emits at most one finding per document. The severity is a warning unless
/// the context is strict: the vocabulary has grown before and will again.
pub struct KnownStatus;

impl Rule for KnownStatus {
    fn name(&self) -> &'static str {
        "known-status"
    }

    fn check(&self, doc: &Document, ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        let Some(value) = doc.status() else {
            return;
        };
        if let Status::Other(token) = &value.status {
            let field = doc.metadata.get(&FieldKey::Status);
            let mut diagnostic = Diagnostic::with_severity(
                Violation::UnknownStatus,
                ctx.unknown_status_severity(),
                format!("unrecognized status '{token}'"),
            );
            if let Some(field) = field {
                diagnostic = diagnostic.at_line(field.line);
            }
            out.push(diagnostic);
        }
    }
}
