//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub,
//! authenticating with a personal access token supplied by the operator.

use async_trait::async_trait;
use octocrab::params::repos::Reference;
use octocrab::Octocrab;
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API, authenticated with a
/// personal access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` instance from an authenticated `Octocrab` client.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Trait for branch operations against a single repository.
///
/// This is the seam between the GitHub API and the deletion workflow; the
/// workflow is written against this trait so it can be exercised without
/// network access.
#[async_trait]
pub trait BranchClient: Send + Sync {
    /// Deletes the `heads/{branch}` ref from the given repository.
    ///
    /// Issues one `DELETE /repos/{owner}/{repo}/git/refs/heads/{branch}`
    /// request. The call succeeds if and only if GitHub answers with
    /// `204 No Content`. Any other status (missing branch, insufficient
    /// permission, bad credential, server error) and any transport error is
    /// reported as an `Error` without further distinction. The response body
    /// is not parsed.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `branch` - The branch name, without the `refs/heads/` prefix.
    ///
    /// # Errors
    ///
    /// Returns an `Error::InvalidResponse` if the API call fails for any
    /// reason. The attempt is made exactly once; no retry.
    async fn delete_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<(), Error>;
}

#[async_trait]
impl BranchClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, branch = %branch))]
    async fn delete_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<(), Error> {
        let reference = Reference::Branch(branch.to_string());
        match self.client.repos(owner, repo).delete_ref(&reference).await {
            Ok(()) => {
                info!(
                    owner = owner,
                    repo = repo,
                    branch = branch,
                    "Deleted branch ref"
                );
                Ok(())
            }
            Err(e) => {
                log_octocrab_error("Failed to delete branch ref", e);
                Err(Error::InvalidResponse)
            }
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// The token is sent as an `Authorization` header on every request; it is
/// never logged or persisted by this crate.
///
/// # Errors
///
/// Returns an `Error::ApiError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|_| Error::ApiError())
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),

        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
