//! Error types for Shepherd validation

use std::path::PathBuf;

use thiserror::Error;

/// Fatal structural failure while parsing a single document.
///
/// A structural failure makes the file unparseable as a proposal, but it is
/// never fatal to a corpus run: the scanner records it as a diagnostic and
/// moves on to the next file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The file contains no content at all.
    #[error("document is empty")]
    EmptyDocument,

    /// The first non-blank line is not an H1 title.
    #[error("missing document title: first non-blank line must be an H1 heading")]
    MissingTitle,
}

/// Errors raised while scanning a corpus directory.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus root is not a directory.
    #[error("corpus root {path} is not a directory")]
    NotADirectory {
        /// The offending path
        path: PathBuf,
    },

    /// Directory traversal failed below the corpus root.
    #[error("cannot walk corpus root {path}")]
    Walk {
        /// The corpus root being walked
        path: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
