//! Proposal identifiers

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A proposal's identifier.
///
/// Drafts circulate under placeholder tokens (`NNNN`, `XXXX`) until a review
/// manager assigns a permanent number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProposalId {
    /// A permanently assigned number, rendered `SE-NNNN`
    Assigned(u32),
    /// A placeholder token used before number assignment
    Placeholder(String),
}

fn assigned_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\bSE-(\d{4})\b").expect("valid pattern"))
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(NNNN|XXXX)\b").expect("valid pattern"))
}

impl ProposalId {
    /// Find a proposal id anywhere in a field value.
    ///
    /// The `Proposal` field usually wraps the id in a link
    /// (`[SE-0192](0192-slug.md)`), so this scans rather than matching the
    /// whole value.
    pub fn find_in(text: &str) -> Option<ProposalId> {
        if let Some(captures) = assigned_pattern().captures(text) {
            let number = captures[1].parse().ok()?;
            return Some(ProposalId::Assigned(number));
        }
        placeholder_pattern()
            .find(text)
            .map(|m| ProposalId::Placeholder(m.as_str().to_string()))
    }

    /// Extract the id encoded in a proposal file name (`0192-slug.md`).
    pub fn from_file_name(name: &str) -> Option<ProposalId> {
        let base = name.rsplit('/').next().unwrap_or(name);
        let stem = base.strip_suffix(".md")?;
        let prefix = stem.split('-').next().unwrap_or(stem);
        if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
            return prefix.parse().ok().map(ProposalId::Assigned);
        }
        if prefix == "NNNN" || prefix == "XXXX" {
            return Some(ProposalId::Placeholder(prefix.to_string()));
        }
        None
    }

    /// The assigned number, if this id has one.
    pub fn number(&self) -> Option<u32> {
        match self {
            ProposalId::Assigned(n) => Some(*n),
            ProposalId::Placeholder(_) => None,
        }
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalId::Assigned(n) => write!(f, "SE-{n:04}"),
            ProposalId::Placeholder(token) => f.write_str(token),
        }
    }
}
