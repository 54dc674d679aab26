//! Concatenated revision detection

use crate::context::ValidationContext;
use crate::document::Document;
use crate::report::{Diagnostic, Violation};

use super::Rule;

/// A proposal file has exactly one H1; extras usually mean several revisions
/// of the document were ingested into one file.
///
/// The parser keeps the first title and metadata block as the document, so
/// this is a warning rather than a merge.
pub struct ConcatenatedRevisions;

impl Rule for ConcatenatedRevisions {
    fn name(&self) -> &'static str {
        "concatenated-revisions"
    }

    fn check(&self, doc: &Document, _ctx: &ValidationContext, out: &mut Vec<Diagnostic>) {
        for &line in &doc.extra_title_lines {
            out.push(
                Diagnostic::warn(
                    Violation::ConcatenatedRevisions,
                    "additional document title; file may contain concatenated revisions",
                )
                .at_line(line),
            );
        }
    }
}
