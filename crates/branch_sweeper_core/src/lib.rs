//! # BranchSweeper Core
//!
//! This crate provides the core orchestration logic for BranchSweeper, a tool
//! that deletes a caller-supplied list of branches from a single GitHub
//! repository via the REST API.
//!
//! ## Overview
//!
//! A run is one pass over a fixed plan:
//! 1. Validate the target repository identity and the branch list into a [`SweepPlan`]
//! 2. Issue one deletion request per branch, in declared order
//! 3. Accumulate a [`SweepReport`] of deleted vs. failed branches
//!
//! Every individual deletion failure is non-fatal; the loop always continues
//! to the next branch. Nothing is retried and nothing is persisted.
//!
//! ## Architecture
//!
//! The crate follows a dependency injection pattern for testability:
//! - [`github_client::BranchClient`] trait for the deletion API call
//! - An `on_outcome` callback so callers can report progress as it happens
//!
//! ## Examples
//!
//! ```no_run
//! use branch_sweeper_core::{sweep_branches, SweepPlan};
//! use github_client::{create_token_client, GitHubClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = SweepPlan::from_parts(
//!     "example-org",
//!     "example-repo",
//!     vec!["stale/one".to_string(), "stale/two".to_string()],
//! )?;
//!
//! let client = GitHubClient::new(create_token_client("ghp_example")?);
//! let report = sweep_branches(&client, &plan, |branch, outcome| {
//!     println!("{branch}: {outcome:?}");
//! })
//! .await;
//!
//! println!("deleted: {}, failed: {}", report.deleted, report.failed);
//! # Ok(())
//! # }
//! ```

use github_client::BranchClient;
use tracing::{info, warn};

mod errors;
pub use errors::ValidationError;

/// Repository and branch domain types
pub mod repository;
pub use repository::{BranchName, OrganizationName, RepositoryName};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The fixed inputs of one deletion run.
///
/// Holds the target repository identity and the ordered list of branches to
/// delete. The plan is constructed once, before any network activity, and is
/// never mutated during the run. Duplicate branch names are kept; each entry
/// is attempted once, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    /// Owner of the target repository (user or organization).
    pub owner: OrganizationName,
    /// Name of the target repository.
    pub repo: RepositoryName,
    /// Branches to delete, in the order they will be attempted.
    pub branches: Vec<BranchName>,
}

impl SweepPlan {
    /// Builds a plan from raw strings, validating every name.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the owner, the repository, or any
    /// branch name fails validation. Validation happens before any network
    /// call so a bad plan never reaches the API.
    pub fn from_parts(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branches: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let owner = OrganizationName::new(owner)?;
        let repo = RepositoryName::new(repo)?;
        let branches = branches
            .into_iter()
            .map(BranchName::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            owner,
            repo,
            branches,
        })
    }
}

/// Outcome of a single branch deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// The API answered `204 No Content`; the branch ref is gone.
    Deleted,
    /// Any other status or a transport error. The branch may already be
    /// deleted or the credential may lack permission.
    Failed,
}

/// Tally of a completed run.
///
/// After a confirmed run, `deleted + failed` always equals the length of the
/// plan's branch list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of branches the API confirmed deleted.
    pub deleted: usize,
    /// Number of branches that could not be deleted.
    pub failed: usize,
}

impl SweepReport {
    /// Total number of deletion attempts made.
    pub fn total(&self) -> usize {
        self.deleted + self.failed
    }
}

/// Deletes every branch in the plan, in declared order, and tallies the outcomes.
///
/// Each branch is attempted exactly once. A failed deletion never aborts the
/// run; the loop continues with the next branch. The `on_outcome` callback is
/// invoked after each attempt so the caller can report progress as it
/// happens.
///
/// # Arguments
///
/// * `client` - The API client performing the deletions.
/// * `plan` - The validated repository identity and branch list.
/// * `on_outcome` - Invoked once per branch with the attempt's outcome.
pub async fn sweep_branches<F>(
    client: &dyn BranchClient,
    plan: &SweepPlan,
    mut on_outcome: F,
) -> SweepReport
where
    F: FnMut(&BranchName, BranchOutcome),
{
    let mut report = SweepReport::default();

    for branch in &plan.branches {
        let outcome = match client
            .delete_branch(plan.owner.as_str(), plan.repo.as_str(), branch.as_str())
            .await
        {
            Ok(()) => {
                report.deleted += 1;
                BranchOutcome::Deleted
            }
            Err(e) => {
                warn!(
                    owner = %plan.owner,
                    repo = %plan.repo,
                    branch = %branch,
                    error = %e,
                    "Branch deletion failed"
                );
                report.failed += 1;
                BranchOutcome::Failed
            }
        };

        on_outcome(branch, outcome);
    }

    info!(
        owner = %plan.owner,
        repo = %plan.repo,
        deleted = report.deleted,
        failed = report.failed,
        "Sweep completed"
    );

    report
}
