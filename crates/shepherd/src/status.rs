//! Review lifecycle states and transitions
//!
//! Every proposal carries a `Status` metadata field tracking its position in
//! the review lifecycle. The vocabulary below is the known set; anything else
//! parses to [`Status::Other`] so that a growing editorial process degrades
//! to a warning instead of a hard failure.

use std::fmt;

/// A proposal's position in the review lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// Created, no review scheduled yet (initial state)
    AwaitingReview,

    /// Review manager has set review dates
    ScheduledForReview,

    /// The review window is open
    ActiveReview,

    /// Accepted as proposed
    Accepted,

    /// Accepted after changes requested during review
    AcceptedWithModifications,

    /// Sent back to the authors for another revision cycle
    ReturnedForRevision,

    /// Rejected (terminal)
    Rejected,

    /// Withdrawn by the authors (terminal)
    Withdrawn,

    /// Deferred to a later cycle; revivable only by a new proposal
    Deferred,

    /// Accepted and being built
    ImplementationInProgress,

    /// A draft implementation exists ahead of or alongside review
    DraftImplementation,

    /// Shipped (terminal); the release is captured as free-text detail
    Implemented,

    /// A token outside the known vocabulary
    Other(String),
}

impl Status {
    /// Canonical display name for this state.
    pub fn name(&self) -> &str {
        match self {
            Status::AwaitingReview => "Awaiting review",
            Status::ScheduledForReview => "Scheduled for review",
            Status::ActiveReview => "Active review",
            Status::Accepted => "Accepted",
            Status::AcceptedWithModifications => "Accepted with modifications",
            Status::ReturnedForRevision => "Returned for revision",
            Status::Rejected => "Rejected",
            Status::Withdrawn => "Withdrawn",
            Status::Deferred => "Deferred",
            Status::ImplementationInProgress => "Implementation In Progress",
            Status::DraftImplementation => "Draft implementation",
            Status::Implemented => "Implemented",
            Status::Other(name) => name,
        }
    }

    /// Whether this token belongs to the known lifecycle vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }

    /// Terminal states: nothing follows for this document revision.
    ///
    /// `Deferred` is quasi-terminal (a new proposal may revive the idea) and
    /// is intentionally not included here.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Status::Implemented | Status::Rejected | Status::Withdrawn
        )
    }

    /// States before a review decision has been made.
    pub fn is_pre_decision(&self) -> bool {
        matches!(
            self,
            Status::AwaitingReview | Status::ScheduledForReview | Status::ActiveReview
        )
    }

    /// Whether the lifecycle permits moving from this state to `next`.
    ///
    /// Withdrawal is permitted from any non-terminal known state; the other
    /// edges follow the review process exactly.
    pub fn can_transition_to(&self, next: &Status) -> bool {
        if !self.is_known() || !next.is_known() {
            return false;
        }
        if *next == Status::Withdrawn {
            return !self.is_terminal();
        }
        match (self, next) {
            (Status::AwaitingReview, Status::ScheduledForReview) => true,
            (Status::ScheduledForReview, Status::ActiveReview) => true,
            (
                Status::ActiveReview,
                Status::Accepted
                | Status::AcceptedWithModifications
                | Status::Rejected
                | Status::Deferred
                | Status::ReturnedForRevision,
            ) => true,
            (Status::ReturnedForRevision, Status::AwaitingReview) => true,
            (
                Status::Accepted | Status::AcceptedWithModifications,
                Status::ImplementationInProgress | Status::DraftImplementation,
            ) => true,
            (
                Status::DraftImplementation,
                Status::ImplementationInProgress | Status::Implemented,
            ) => true,
            (Status::ImplementationInProgress, Status::Implemented) => true,
            _ => false,
        }
    }

    /// The names of every known state, in lifecycle order.
    pub fn known_names() -> &'static [&'static str] {
        &[
            "Awaiting review",
            "Scheduled for review",
            "Active review",
            "Accepted",
            "Accepted with modifications",
            "Returned for revision",
            "Rejected",
            "Withdrawn",
            "Deferred",
            "Implementation In Progress",
            "Draft implementation",
            "Implemented",
        ]
    }

    fn from_name(name: &str) -> Status {
        let folded = name.trim().to_ascii_lowercase();
        match folded.as_str() {
            "awaiting review" => Status::AwaitingReview,
            "scheduled for review" => Status::ScheduledForReview,
            "active review" | "in review" | "under review" => Status::ActiveReview,
            "accepted" => Status::Accepted,
            "accepted with modifications" | "accepted with revisions" => {
                Status::AcceptedWithModifications
            }
            "returned for revision" => Status::ReturnedForRevision,
            "rejected" => Status::Rejected,
            "withdrawn" => Status::Withdrawn,
            "deferred" => Status::Deferred,
            "implementation in progress" => Status::ImplementationInProgress,
            "draft implementation" => Status::DraftImplementation,
            "implemented" => Status::Implemented,
            _ => Status::Other(name.trim().to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed `Status` field value: the state plus any parenthetical detail.
///
/// The detail is free text and is never interpreted. It carries review date
/// ranges (`Active review (March 21...28, 2017)`) and shipped releases
/// (`Implemented (Swift 4.0)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusValue {
    /// The lifecycle state
    pub status: Status,
    /// Parenthetical free text following the state name, if any
    pub detail: Option<String>,
}

impl StatusValue {
    /// Parse a raw `Status` field value.
    ///
    /// Markdown emphasis markers are stripped and a single trailing
    /// parenthetical is split off as detail. Parsing never fails; an
    /// unrecognized token becomes [`Status::Other`].
    pub fn parse(raw: &str) -> StatusValue {
        let text = strip_emphasis(raw);
        let (name, detail) = split_detail(&text);
        StatusValue {
            status: Status::from_name(name),
            detail: detail.map(str::to_string),
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.status, detail),
            None => write!(f, "{}", self.status),
        }
    }
}

/// Remove `*` and `_` emphasis markers wrapping a field value.
fn strip_emphasis(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '*' || c == '_')
        .trim()
        .to_string()
}

/// Split a trailing `(...)` group off a status value.
///
/// A value that is nothing but a parenthetical stays a name; only a group
/// following a state name is detail.
fn split_detail(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim();
    if !trimmed.ends_with(')') {
        return (trimmed, None);
    }
    match trimmed.rfind('(') {
        Some(open) if open > 0 => {
            let name = trimmed[..open].trim_end();
            let detail = trimmed[open + 1..trimmed.len() - 1].trim();
            (name, Some(detail))
        }
        _ => (trimmed, None),
    }
}
