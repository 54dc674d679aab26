use pretty_assertions::assert_eq;
use shepherd::*;

const HEADER: &str = "\
* Proposal: [SE-0192](0192-non-exhaustive-enums.md)
* Authors: [Jordan Rose](https://github.com/jrose)
* Review Manager: [Ted K](https://github.com/tk)
* Status: **Implemented (Swift 5.0)**
* Review: ([pitch](https://forums.example.org/t/1))
  * [review](https://forums.example.org/t/2)
  * [acceptance](https://forums.example.org/t/3)
* Previous Revisions: [1](https://example.org/rev1)
";

// Re-serializing a parsed record and re-parsing it yields the same record.
#[test]
fn test_metadata_round_trip() {
    let record = parse_metadata_block(HEADER);
    assert_eq!(record.len(), 6);

    let rendered = record.to_markdown();
    let reparsed = parse_metadata_block(&rendered);
    assert_eq!(record, reparsed);
}

#[test]
fn test_round_trip_preserves_duplicates_and_order() {
    let header = "\
* Review Manager: [First](https://example.org/a)
* Status: Accepted
* Review Manager: [Second](https://example.org/b)
";
    let record = parse_metadata_block(header);
    let reparsed = parse_metadata_block(&record.to_markdown());
    assert_eq!(record, reparsed);

    let names: Vec<&str> = reparsed.entries().iter().map(|f| f.raw_name.as_str()).collect();
    assert_eq!(names, vec!["Review Manager", "Status", "Review Manager"]);
}

#[test]
fn test_round_trip_preserves_raw_synonym_spelling() {
    let record = parse_metadata_block("* Author(s): [Jane](https://example.org/jane)\n");
    let rendered = record.to_markdown();
    assert_eq!(rendered, "* Author(s): [Jane](https://example.org/jane)\n");

    let reparsed = parse_metadata_block(&rendered);
    assert_eq!(record, reparsed);
    assert_eq!(reparsed.get(&FieldKey::Authors).unwrap().raw_name, "Author(s)");
}

#[test]
fn test_round_trip_through_full_document() {
    let text = format!("# Title\n\n{HEADER}\n## Introduction\n");
    let doc = parse_document("0192-non-exhaustive-enums.md", &text).unwrap();
    let reparsed = parse_metadata_block(&doc.metadata.to_markdown());
    assert_eq!(doc.metadata, reparsed);
}
