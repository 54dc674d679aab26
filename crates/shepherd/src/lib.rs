//! # Shepherd
//!
//! A structural validator for language-evolution proposal corpora.
//!
//! A proposal corpus is a directory of Markdown documents, each carrying an
//! H1 title, a bulleted metadata header (proposal id, authors, review
//! status, links), and conventional body sections. Shepherd parses that
//! structure and checks it against the review lifecycle schema, reporting
//! one diagnostic per violation without ever letting a malformed file abort
//! the run.
//!
//! ## Architecture
//!
//! - **Parse**: raw text to a [`Document`] (pure, line-oriented)
//! - **Rules**: per-document checks behind the [`Rule`] trait
//! - **Corpus**: directory scan, parallel validation, cross-reference pass
//! - **Report**: diagnostics aggregated per file, text or JSON
//!
//! ## Example
//!
//! ```
//! use shepherd::{parse_document, validate_document, ValidationContext};
//!
//! let text = "\
//! ## Example Proposal
//!
//! * Proposal: [SE-0001](0001-example.md)
//! * Authors: [Jane Appleseed](https://example.org/jane)
//! * Status: **Accepted**
//!
//! ### Introduction
//! ";
//! let doc = parse_document("0001-example.md", text).unwrap();
//! let diagnostics = validate_document(&doc, &ValidationContext::new());
//! assert!(diagnostics.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod corpus;
pub mod document;
pub mod error;
pub mod parse;
pub mod report;
pub mod rules;
pub mod status;

// Re-export main types
pub use context::ValidationContext;
pub use corpus::scan;
pub use document::{
    Document, Field, FieldKey, Link, MetadataRecord, ProposalId, Section, Title,
};
pub use error::{CorpusError, StructureError};
pub use parse::{parse_document, parse_metadata_block};
pub use report::{CorpusReport, Diagnostic, FileReport, Severity, Violation};
pub use rules::{builtin_rules, validate_document, Rule};
pub use status::{Status, StatusValue};

/// Shepherd version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
