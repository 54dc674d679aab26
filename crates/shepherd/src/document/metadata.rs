//! Metadata record and field keys

use indexmap::IndexMap;

/// Canonical identity of a metadata field.
///
/// The source corpus never agreed on exact field spellings (`Author`,
/// `Authors`, `Author(s)`), so raw names are folded case-insensitively
/// through a synonym table into one canonical key. Unrecognized names are
/// preserved verbatim in [`FieldKey::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// The proposal id (`SE-NNNN` or a placeholder)
    Proposal,
    /// The listed authors
    Authors,
    /// The review manager shepherding the proposal
    ReviewManager,
    /// Lifecycle state, see [`crate::status::Status`]
    Status,
    /// Link(s) to the change realizing the proposal
    Implementation,
    /// Issue-tracker references
    Bugs,
    /// Rationale recorded with the review decision
    DecisionNotes,
    /// Pitch/review/acceptance thread links
    Review,
    /// The proposal this one supersedes
    PreviousProposal,
    /// Earlier revisions of this same proposal
    PreviousRevisions,
    /// Any field name outside the known vocabulary
    Other(String),
}

impl FieldKey {
    /// Fold a raw field name into its canonical key.
    pub fn from_name(name: &str) -> FieldKey {
        let folded = name.trim().to_ascii_lowercase();
        match folded.as_str() {
            "proposal" => FieldKey::Proposal,
            "author" | "authors" | "author(s)" => FieldKey::Authors,
            "review manager" | "review managers" => FieldKey::ReviewManager,
            "status" => FieldKey::Status,
            "implementation" => FieldKey::Implementation,
            "bug" | "bugs" => FieldKey::Bugs,
            "decision notes" | "rationale" => FieldKey::DecisionNotes,
            "review" | "reviews" => FieldKey::Review,
            "previous proposal" => FieldKey::PreviousProposal,
            "previous revision" | "previous revisions" => FieldKey::PreviousRevisions,
            _ => FieldKey::Other(name.trim().to_string()),
        }
    }

    /// Canonical display name for this key.
    pub fn canonical_name(&self) -> &str {
        match self {
            FieldKey::Proposal => "Proposal",
            FieldKey::Authors => "Authors",
            FieldKey::ReviewManager => "Review Manager",
            FieldKey::Status => "Status",
            FieldKey::Implementation => "Implementation",
            FieldKey::Bugs => "Bugs",
            FieldKey::DecisionNotes => "Decision Notes",
            FieldKey::Review => "Review",
            FieldKey::PreviousProposal => "Previous Proposal",
            FieldKey::PreviousRevisions => "Previous Revisions",
            FieldKey::Other(name) => name,
        }
    }
}

/// One parsed metadata field.
#[derive(Debug, Clone, Eq)]
pub struct Field {
    /// Canonical key
    pub key: FieldKey,
    /// The field name exactly as written in the source
    pub raw_name: String,
    /// The value text after the colon, trimmed
    pub value: String,
    /// 1-based line number of the bullet
    pub line: usize,
    /// Nested sub-bullet contents (e.g. the `Review` pitch/review sub-list)
    pub children: Vec<String>,
}

// Line numbers are provenance, not content: a record rendered back to
// Markdown and re-parsed must compare equal to the original.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.raw_name == other.raw_name
            && self.value == other.value
            && self.children == other.children
    }
}

/// The ordered metadata block of one document.
///
/// Fields keep their source order (the round-trip law depends on it) and
/// duplicate declarations of one key are all retained so the duplicate-field
/// rule can see them.
#[derive(Debug, Clone, Default)]
pub struct MetadataRecord {
    entries: Vec<Field>,
    index: IndexMap<FieldKey, Vec<usize>>,
}

impl MetadataRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving source order.
    pub fn push(&mut self, field: Field) {
        let slot = self.entries.len();
        self.index.entry(field.key.clone()).or_default().push(slot);
        self.entries.push(field);
    }

    /// Whether the record holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All fields in source order.
    pub fn entries(&self) -> &[Field] {
        &self.entries
    }

    /// First declaration of `key`, if any.
    pub fn get(&self, key: &FieldKey) -> Option<&Field> {
        self.index
            .get(key)
            .and_then(|slots| slots.first())
            .map(|&slot| &self.entries[slot])
    }

    /// Every declaration of `key`, in source order.
    pub fn get_all(&self, key: &FieldKey) -> Vec<&Field> {
        self.index
            .get(key)
            .map(|slots| slots.iter().map(|&slot| &self.entries[slot]).collect())
            .unwrap_or_default()
    }

    /// Whether `key` is declared at least once.
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.index.contains_key(key)
    }

    /// Distinct canonical keys, in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.index.keys()
    }
}

// The index is derived from the entries, so equality is entries-only.
impl PartialEq for MetadataRecord {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for MetadataRecord {}
