//! Parsed proposal document model

mod display;
mod id;
mod metadata;

pub use id::ProposalId;
pub use metadata::{Field, FieldKey, MetadataRecord};

/// A single parsed proposal document.
///
/// Produced by [`crate::parse::parse_document`]; holds everything the
/// validation rules look at. Parsing is pure, so two parses of the same text
/// yield equal documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display name used in diagnostics (usually the file path)
    pub source: String,

    /// The H1 title
    pub title: Title,

    /// The metadata bullet list following the title
    pub metadata: MetadataRecord,

    /// `##`-delimited body sections, in order
    pub sections: Vec<Section>,

    /// Every inline link in the body, in order
    pub links: Vec<Link>,

    /// Lines of H1 headings beyond the first.
    ///
    /// A well-formed proposal has exactly one H1; extras usually mean
    /// concatenated revisions were ingested as one file.
    pub extra_title_lines: Vec<usize>,
}

impl Document {
    /// The proposal id declared in the `Proposal` field, if one parses.
    pub fn proposal_id(&self) -> Option<ProposalId> {
        self.metadata
            .get(&FieldKey::Proposal)
            .and_then(|field| ProposalId::find_in(&field.value))
    }

    /// The parsed lifecycle status, if a `Status` field exists.
    ///
    /// Only the first `Status` declaration counts; duplicates are the
    /// duplicate-field rule's business.
    pub fn status(&self) -> Option<crate::status::StatusValue> {
        self.metadata
            .get(&FieldKey::Status)
            .map(|field| crate::status::StatusValue::parse(&field.value))
    }
}

/// The document's H1 title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// Heading text without the `#` marker
    pub text: String,
    /// 1-based line number
    pub line: usize,
}

/// One `##`-or-deeper body section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text without the `#` markers
    pub heading: String,
    /// Heading depth (2 for `##`)
    pub level: u8,
    /// 1-based line number
    pub line: usize,
}

/// An inline `[text](target)` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The link text
    pub text: String,
    /// The raw link target
    pub target: String,
    /// 1-based line number
    pub line: usize,
}

impl Link {
    /// Whether the target points at another proposal file in the corpus.
    ///
    /// Proposal references look like `NNNN-slug.md` (optionally behind a
    /// relative path or with a `#fragment`); anything with a URL scheme is
    /// external and can never be verified offline.
    pub fn is_proposal_ref(&self) -> bool {
        self.proposal_file_name().is_some()
    }

    /// The bare proposal file name this link targets, if it is one.
    pub fn proposal_file_name(&self) -> Option<&str> {
        let target = self.target.split('#').next().unwrap_or("");
        if target.contains("://") || target.starts_with("mailto:") {
            return None;
        }
        let name = target.rsplit('/').next().unwrap_or(target);
        let stem = name.strip_suffix(".md")?;
        let (prefix, rest) = stem.split_at_checked(4)?;
        if !rest.is_empty() && !rest.starts_with('-') {
            return None;
        }
        let numbered = prefix.chars().all(|c| c.is_ascii_digit());
        if numbered || prefix == "NNNN" || prefix == "XXXX" {
            Some(name)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(target: &str) -> Link {
        Link {
            text: "ref".to_string(),
            target: target.to_string(),
            line: 1,
        }
    }

    #[test]
    fn test_proposal_ref_classification() {
        assert!(link("0192-non-exhaustive-enums.md").is_proposal_ref());
        assert!(link("proposals/0007-remove-currying.md").is_proposal_ref());
        assert!(link("0042-flatten.md#motivation").is_proposal_ref());
        assert!(link("NNNN-draft-slug.md").is_proposal_ref());

        assert!(!link("https://github.com/org/repo/pull/1").is_proposal_ref());
        assert!(!link("mailto:someone@example.com").is_proposal_ref());
        assert!(!link("README.md").is_proposal_ref());
        assert!(!link("notes.txt").is_proposal_ref());
    }

    #[test]
    fn test_proposal_file_name_strips_path_and_fragment() {
        assert_eq!(
            link("proposals/0042-flatten.md#detail").proposal_file_name(),
            Some("0042-flatten.md")
        );
    }
}
