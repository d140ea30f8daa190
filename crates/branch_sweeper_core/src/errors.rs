//! Error types for plan validation.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// A domain name (owner, repository, or branch) failed validation.
///
/// Validation happens while the sweep plan is being built, before any prompt
/// or network activity, so an invalid configuration can never reach the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// The field that was empty.
        field: &'static str,
    },

    /// A field did not match the format GitHub accepts.
    #[error("{field} is invalid: {reason}")]
    InvalidFormat {
        /// The field that failed validation.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A field exceeded the maximum length GitHub accepts.
    #[error("{field} is too long: {actual} characters (maximum {max})")]
    TooLong {
        /// The field that failed validation.
        field: &'static str,
        /// The observed length.
        actual: usize,
        /// The maximum allowed length.
        max: usize,
    },
}

impl ValidationError {
    /// Create an error for an empty field
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    /// Create an error for an invalid format
    pub fn invalid_format(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidFormat { field, reason }
    }

    /// Create an error for an over-long value
    pub fn too_long(field: &'static str, actual: usize, max: usize) -> Self {
        Self::TooLong { field, actual, max }
    }
}
