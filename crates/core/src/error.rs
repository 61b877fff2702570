//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, user-facing failures (validation,
/// malformed input). Dataset loading and process concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A submission was attempted while required fields were still empty.
    ///
    /// `missing` lists the empty fields in form order.
    #[error("please fill in all fields (missing: {})", .missing.join(", "))]
    IncompleteSubmission { missing: Vec<&'static str> },

    /// A numeric field did not hold a valid non-negative number.
    #[error("{field} must be a non-negative number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn incomplete(missing: Vec<&'static str>) -> Self {
        Self::IncompleteSubmission { missing }
    }

    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for the "fill in all fields" failure a form shows as an alert.
    pub fn is_incomplete_submission(&self) -> bool {
        matches!(self, Self::IncompleteSubmission { .. })
    }
}
