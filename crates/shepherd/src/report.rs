//! Diagnostic types and per-run report aggregation

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message (never fails the run)
    Info,
    /// Warning (reported, but does not fail the run)
    Warn,
    /// Error (fails the run)
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The kind of schema violation a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    /// Missing title or otherwise unparseable document
    Structure,
    /// Required metadata field absent
    MissingMetadata,
    /// `Proposal` field does not contain a recognizable id
    MalformedId,
    /// Status token outside the known lifecycle set
    UnknownStatus,
    /// A canonical metadata field declared more than once
    DuplicateField,
    /// Two files claim the same assigned proposal number
    DuplicateProposal,
    /// Proposal-internal link target not present in the corpus
    DanglingReference,
    /// Extra H1 headings suggesting concatenated revisions in one file
    ConcatenatedRevisions,
    /// Decision rationale populated before the review concluded
    DecisionNotesTiming,
    /// Assigned id in the header disagrees with the filename
    IdMismatch,
    /// Authors field present but empty
    EmptyAuthors,
}

impl Violation {
    /// The diagnostic label, as printed in `path:line: <label>: <message>`.
    pub fn label(&self) -> &'static str {
        match self {
            Violation::Structure => "StructureError",
            Violation::MissingMetadata => "MissingMetadataError",
            Violation::MalformedId => "MalformedIdError",
            Violation::UnknownStatus => "UnknownStatusError",
            Violation::DuplicateField => "DuplicateFieldError",
            Violation::DuplicateProposal => "DuplicateProposalError",
            Violation::DanglingReference => "DanglingReferenceError",
            Violation::ConcatenatedRevisions => "ConcatenatedRevisionsError",
            Violation::DecisionNotesTiming => "DecisionNotesError",
            Violation::IdMismatch => "IdMismatchError",
            Violation::EmptyAuthors => "EmptyAuthorsError",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One finding against one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Violation kind
    pub kind: Violation,
    /// Severity level
    pub severity: Severity,
    /// 1-based line the finding anchors to, when one exists
    pub line: Option<usize>,
    /// Human-readable message
    pub message: String,
    /// Optional hint for fixing the issue
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(kind: Violation, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            line: None,
            message: message.into(),
            hint: None,
        }
    }

    /// Create a warning diagnostic
    pub fn warn(kind: Violation, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warn,
            line: None,
            message: message.into(),
            hint: None,
        }
    }

    /// Create a diagnostic with an explicit severity
    pub fn with_severity(kind: Violation, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            line: None,
            message: message.into(),
            hint: None,
        }
    }

    /// Anchor this diagnostic to a line
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a hint to this diagnostic
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Check if this is a warning
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warn
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {}: {}", line, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

/// All diagnostics collected for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the checked file
    pub path: PathBuf,
    /// Findings, in rule order
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// A file is valid when it produced no error-severity findings.
    pub fn valid(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Render each diagnostic as a `path:line: <label>: <message>` line.
    pub fn render_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.diagnostics.iter().map(|d| {
            let path = self.path.display();
            match d.line {
                Some(line) => format!("{}:{}: {}: {}", path, line, d.kind, d.message),
                None => format!("{}: {}: {}", path, d.kind, d.message),
            }
        })
    }
}

/// Aggregated result of a corpus scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Per-file reports, in deterministic path order
    pub files: Vec<FileReport>,
}

impl CorpusReport {
    /// True when any file produced an error-severity finding.
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| !f.valid())
    }

    /// Number of files that failed validation.
    pub fn invalid_files(&self) -> usize {
        self.files.iter().filter(|f| !f.valid()).count()
    }

    /// Total error-severity findings across all files.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Total warning-severity findings across all files.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    fn count(&self, severity: Severity) -> usize {
        self.files
            .iter()
            .flat_map(|f| f.diagnostics.iter())
            .filter(|d| d.severity == severity)
            .count()
    }
}
