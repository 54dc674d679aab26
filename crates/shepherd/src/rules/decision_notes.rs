//! Decision rationale timing

use crate::context::ValidationContext;
use crate::document::{Document, FieldKey};
use crate::report::{Diagnostic, Violation};

use super::Rule;

/// `Decision Notes` should only be populated once the review has concluded.
pub struct DecisionNotesTiming;

impl Rule for DecisionNotesTiming {
    fn name(&self) -> &'static str {
        "decision-notes-timing"
    }

    fn check(&self, doc: &Document, _ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        let Some(notes) = doc.metadata.get(&FieldKey::DecisionNotes) else {
            return;
        };
        if notes.value.is_empty() && notes.children.is_empty() {
            return;
        }
        let Some(value) = doc.status() else {
            return;
        };
        if value.status.is_pre_decision() {
            out.push(
                Diagnostic::warn(
                    Violation::DecisionNotesTiming,
                    format!(
                        "'Decision Notes' populated while status is still '{}'",
                        value.status
                    ),
                )
                .at_line(notes.line),
            );
        }
    }
}
