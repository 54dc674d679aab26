//! Validation context configuration

use crate::report::Severity;

/// Configuration for a validation run.
///
/// This is passed through all rule checks and the corpus scanner and
/// controls behavior like strictness and the cross-reference pass.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Escalate unknown status tokens from warning to error.
    ///
    /// The status vocabulary of a living review process grows over time, so
    /// an unrecognized token is a warning by default.
    pub strict: bool,

    /// Resolve proposal-internal links against the corpus index.
    pub check_references: bool,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            strict: false,
            check_references: true,
        }
    }
}

impl ValidationContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a strict context: unknown status tokens become errors.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Severity assigned to an unrecognized status token under this context.
    pub fn unknown_status_severity(&self) -> Severity {
        if self.strict {
            Severity::Error
        } else {
            Severity::Warn
        }
    }
}
