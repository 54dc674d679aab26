//! Proposal id checks

use crate::context::ValidationContext;
use crate::document::{Document, FieldKey, ProposalId};
use crate::report::{Diagnostic, Violation};

use super::Rule;

/// The `Proposal` field must carry a recognizable id, and an assigned id
/// must agree with the number encoded in the filename.
pub struct WellFormedId;

impl Rule for WellFormedId {
    fn name(&self) -> &'static str {
        "well-formed-id"
    }

    fn check(&self, doc: &Document, _ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        let Some(field) = doc.metadata.get(&FieldKey::Proposal) else {
            return;
        };

        let Some(id) = ProposalId::find_in(&field.value) else {
            out.push(
                Diagnostic::error(
                    Violation::MalformedId,
                    format!("field 'Proposal' does not contain a proposal id: '{}'", field.value),
                )
                .at_line(field.line)
                .with_hint("expected SE-NNNN or a placeholder like NNNN"),
            );
            return;
        };

        // Filename agreement is a warning: drafts legitimately carry a
        // placeholder on one side while a number lands on the other.
        let (Some(declared), Some(file_id)) = (id.number(), ProposalId::from_file_name(&doc.source))
        else {
            return;
        };
        if let Some(file_number) = file_id.number() {
            if declared != file_number {
                out.push(
                    Diagnostic::warn(
                        Violation::IdMismatch,
                        format!(
                            "header declares {} but the filename encodes {}",
                            ProposalId::Assigned(declared),
                            ProposalId::Assigned(file_number)
                        ),
                    )
                    .at_line(field.line),
                );
            }
        }
    }
}
