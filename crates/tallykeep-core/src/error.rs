//! Error surface of the counter registry.

use thiserror::Error;

/// Machine-checkable error classification (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation referenced a label absent from the registry.
    NoLabel,
    /// Attempted to introduce a label that already exists.
    DuplicateLabel,
    /// Supplied step was not a strictly positive integer.
    BadValue,
}

impl ErrorKind {
    /// Stable string code for hosts that match on text.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NoLabel => "NO_LABEL",
            ErrorKind::DuplicateLabel => "DUPLICATE_LABEL",
            ErrorKind::BadValue => "BAD_VALUE",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Error type for every registry operation.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("no counter with label '{0}'")]
    NoLabel(String),
    #[error("counter label '{0}' already exists")]
    DuplicateLabel(String),
    #[error("step must be a positive integer, got {0}")]
    BadValue(i64),
}

impl TallyError {
    /// Map the error to its stable classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TallyError::NoLabel(_) => ErrorKind::NoLabel,
            TallyError::DuplicateLabel(_) => ErrorKind::DuplicateLabel,
            TallyError::BadValue(_) => ErrorKind::BadValue,
        }
    }
}
