use shepherd::*;

// Build a document around the given metadata bullet lines
fn doc_text(metadata: &[&str]) -> String {
    let mut text = String::from("# Test Proposal\n\n");
    for line in metadata {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("\n## Introduction\n\nProse.\n");
    text
}

fn check_named(source: &str, text: &str) -> Vec<Diagnostic> {
    let doc = parse_document(source, text).expect("parse failed");
    validate_document(&doc, &ValidationContext::new())
}

fn check(metadata: &[&str]) -> Vec<Diagnostic> {
    check_named("0001-test.md", &doc_text(metadata))
}

fn kinds(diagnostics: &[Diagnostic]) -> Vec<Violation> {
    diagnostics.iter().map(|d| d.kind).collect()
}

const COMPLETE: &[&str] = &[
    "* Proposal: [SE-0001](0001-test.md)",
    "* Authors: [Jane Appleseed](https://example.org/jane)",
    "* Status: **Accepted**",
];

// ═══════════════════════════════════════════════════════════════════════
// Required Fields
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_complete_header_is_clean() {
    assert_eq!(check(COMPLETE), vec![]);
}

#[test]
fn test_missing_status_reported() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::MissingMetadata]);
    assert!(diagnostics[0].message.contains("'Status'"));
    assert!(diagnostics[0].is_error());
}

#[test]
fn test_missing_metadata_block_yields_exactly_one_finding() {
    let diagnostics = check_named("0001-test.md", "# Title\n\n## Introduction\n\nProse.\n");
    assert_eq!(kinds(&diagnostics), vec![Violation::MissingMetadata]);
    assert_eq!(diagnostics[0].message, "metadata block is missing");
}

#[test]
fn test_empty_authors_reported() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors:",
        "* Status: Accepted",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::EmptyAuthors]);
}

// ═══════════════════════════════════════════════════════════════════════
// Proposal Id
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_malformed_id_reported() {
    let diagnostics = check(&[
        "* Proposal: not-an-id",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Status: Accepted",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::MalformedId]);
}

#[test]
fn test_placeholder_id_is_legal() {
    let diagnostics = check_named(
        "NNNN-draft.md",
        &doc_text(&[
            "* Proposal: NNNN",
            "* Authors: [Jane Appleseed](https://example.org/jane)",
            "* Status: Awaiting review",
        ]),
    );
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_id_filename_mismatch_is_a_warning() {
    let diagnostics = check_named("0002-test.md", &doc_text(COMPLETE));
    assert_eq!(kinds(&diagnostics), vec![Violation::IdMismatch]);
    assert!(diagnostics[0].is_warning());
}

// ═══════════════════════════════════════════════════════════════════════
// Status Vocabulary
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_status_is_one_warning() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Status: **Bikeshedding**",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::UnknownStatus]);
    assert!(diagnostics[0].is_warning());
    assert!(diagnostics[0].message.contains("Bikeshedding"));
}

#[test]
fn test_unknown_status_is_error_when_strict() {
    let doc = parse_document(
        "0001-test.md",
        &doc_text(&[
            "* Proposal: [SE-0001](0001-test.md)",
            "* Authors: [Jane Appleseed](https://example.org/jane)",
            "* Status: Bikeshedding",
        ]),
    )
    .unwrap();
    let diagnostics = validate_document(&doc, &ValidationContext::strict());
    assert_eq!(kinds(&diagnostics), vec![Violation::UnknownStatus]);
    assert!(diagnostics[0].is_error());
}

#[test]
fn test_active_review_with_dates_is_clean() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Review Manager: [Max Reviewer](https://example.org/max)",
        "* Status: Active review (March 21...28, 2017)",
    ]);
    assert_eq!(diagnostics, vec![]);
}

// ═══════════════════════════════════════════════════════════════════════
// Implementation Link
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_implemented_without_implementation_reported() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Status: **Implemented (Swift 4.0)**",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::MissingMetadata]);
    assert!(diagnostics[0].message.contains("'Implementation'"));
}

#[test]
fn test_implemented_with_implementation_is_clean() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Status: **Implemented (Swift 4.0)**",
        "* Implementation: [apple/swift#123](https://github.com/apple/swift/pull/123)",
    ]);
    assert_eq!(diagnostics, vec![]);
}

// ═══════════════════════════════════════════════════════════════════════
// Duplicates, Decision Notes, Concatenated Revisions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_review_manager_reported() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Review Manager: [Max Reviewer](https://example.org/max)",
        "* Status: Accepted",
        "* Review Manager: [Second Reviewer](https://example.org/second)",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::DuplicateField]);
    assert!(diagnostics[0].is_warning());
    assert_eq!(diagnostics[0].line, Some(7));
}

#[test]
fn test_author_synonyms_count_as_duplicates() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Author: [Jane Appleseed](https://example.org/jane)",
        "* Authors: [John Appleseed](https://example.org/john)",
        "* Status: Accepted",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::DuplicateField]);
}

#[test]
fn test_decision_notes_before_decision_reported() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Status: Active review",
        "* Decision Notes: [rationale](https://example.org/rationale)",
    ]);
    assert_eq!(kinds(&diagnostics), vec![Violation::DecisionNotesTiming]);
}

#[test]
fn test_decision_notes_after_decision_is_clean() {
    let diagnostics = check(&[
        "* Proposal: [SE-0001](0001-test.md)",
        "* Authors: [Jane Appleseed](https://example.org/jane)",
        "* Status: Rejected",
        "* Decision Notes: [rationale](https://example.org/rationale)",
    ]);
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_concatenated_revisions_reported() {
    let text = "\
# Test Proposal

* Proposal: [SE-0001](0001-test.md)
* Authors: [Jane Appleseed](https://example.org/jane)
* Status: Accepted

## Body

# Test Proposal

* Status: Rejected
";
    let diagnostics = check_named("0001-test.md", text);
    assert_eq!(kinds(&diagnostics), vec![Violation::ConcatenatedRevisions]);
    assert_eq!(diagnostics[0].line, Some(9));
}
