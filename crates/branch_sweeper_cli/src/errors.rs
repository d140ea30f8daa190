use branch_sweeper_core::ValidationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the BranchSweeper CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations. Per-branch deletion failures are deliberately not errors:
/// they are counted and reported by the sweep itself, and the run continues.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error occurred while building the GitHub client.
    ///
    /// This error is returned when the client cannot be constructed from the
    /// supplied token. An invalid token that the API rejects shows up as
    /// failed deletions instead.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// This error is returned when there are issues with the configuration file,
    /// such as a missing file, unreadable contents, or invalid TOML.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A name in the configuration file failed validation.
    ///
    /// This error is returned when the owner, repository, or a branch name
    /// cannot form a valid sweep plan. No prompt is shown and no network
    /// call is made.
    #[error("Invalid name in configuration: {0}")]
    InvalidName(#[from] ValidationError),

    /// Failed to flush the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write output to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,
}
