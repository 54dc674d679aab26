//! Validation rules
//!
//! Each rule inspects one parsed document and appends diagnostics. Rules are
//! pure: the same document and context always produce the same findings, and
//! no rule ever aborts validation of the file (structural failure is handled
//! before rules run).
//!
//! Corpus-wide checks that need the full document set (cross-references,
//! duplicate proposal numbers) live in [`crate::corpus`], not here.

mod decision_notes;
mod duplicate_fields;
mod id;
mod implementation;
mod required_fields;
mod revisions;
mod status;

use crate::context::ValidationContext;
use crate::document::Document;
use crate::report::Diagnostic;

pub use decision_notes::DecisionNotesTiming;
pub use duplicate_fields::DuplicateFields;
pub use id::WellFormedId;
pub use implementation::ImplementedHasImplementation;
pub use required_fields::RequiredFields;
pub use revisions::ConcatenatedRevisions;
pub use status::KnownStatus;

/// A single validation rule run against one parsed document.
pub trait Rule {
    /// Stable rule name, shown in verbose logs.
    fn name(&self) -> &'static str;

    /// Check the document, appending any findings to `out`.
    fn check(&self, doc: &Document, ctx: &ValidationContext, out: &mut Vec<Diagnostic>);
}

/// All built-in per-document rules, in reporting order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RequiredFields),
        Box::new(WellFormedId),
        Box::new(KnownStatus),
        Box::new(ImplementedHasImplementation),
        Box::new(DuplicateFields),
        Box::new(DecisionNotesTiming),
        Box::new(ConcatenatedRevisions),
    ]
}

/// Run every built-in rule against a document.
pub fn validate_document(doc: &Document, ctx: &ValidationContext) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for rule in builtin_rules() {
        rule.check(doc, ctx, &mut out);
    }
    out
}
