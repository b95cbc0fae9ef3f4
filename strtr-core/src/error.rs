//! Replacement error types

use thiserror::Error;

/// Errors raised by a replacement call
///
/// Every error aborts the whole call; no partial output is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// Caller supplied inconsistent arguments
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the arguments were rejected
        reason: String,
    },

    /// A needle has no replacement value
    #[error("configuration error: no replacement for needle '{needle}'")]
    ConfigurationError {
        /// The needle whose replacement is absent
        needle: String,
    },

    /// An occurrence was built with an inverted span
    #[error("invariant violation: occurrence start {start} is greater than end {end}")]
    InvariantViolation {
        /// Inclusive start offset
        start: usize,
        /// Inclusive end offset
        end: usize,
    },
}

/// Result type for replacement operations
pub type Result<T> = std::result::Result<T, ReplaceError>;
