//! Error types for tableau construction and transformation.
//!
//! All errors are programmer/input errors reported at the point of
//! detection; nothing here is transient or retryable.

use thiserror::Error;

/// Errors raised by tableau operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableauError {
    /// Raw filling or shape data violates a structural invariant at
    /// construction time (empty row, non-prefix holes, non-partition
    /// row lengths, zero entry).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An operation was given a parameter outside its domain (a slide
    /// corner that is not an inner corner, a word of the wrong length,
    /// a weight that does not sum to the shape size).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A structural precondition fails on an otherwise well-formed
    /// tableau (non-semistandard input to standardization or
    /// Bender-Knuth, non-empty inner shape where a straight tableau is
    /// required, non-ribbon shape in a ribbon conversion).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableauError>;
