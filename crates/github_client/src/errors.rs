//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. The deletion workflow deliberately collapses all API
//! failures into one bucket, so the taxonomy here stays small; the tracing log carries the
//! distinguishing detail instead.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when the GitHub client itself cannot be constructed
    /// or a request fails before reaching the API.
    #[error("API request failed")]
    ApiError(),

    /// Authentication or GitHub client initialization failure.
    ///
    /// The contained string provides specific details about the authentication failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The GitHub API answered a request with anything other than the expected
    /// success status.
    ///
    /// For a deletion this means any status other than `204 No Content`: the
    /// branch may already be deleted, the credential may lack permission, or
    /// the API may have failed outright. Callers treat all of these uniformly.
    #[error("Invalid response format")]
    InvalidResponse,
}
