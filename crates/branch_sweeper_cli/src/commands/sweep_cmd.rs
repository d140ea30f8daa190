//! Branch sweep command module.
//!
//! This module drives the delete-all-listed-branches workflow end to end:
//! loading the deletion targets from configuration, showing the operator the
//! full list, asking for a single yes/no confirmation, and then deleting the
//! branches one by one while printing each outcome.
//!
//! ## Behavior
//!
//! - No network call is made until the operator has explicitly confirmed
//! - Each branch is attempted exactly once, in the order it was listed
//! - A failed deletion never aborts the run; it is counted and reported
//! - The run ends with a summary of deleted vs. failed branches

use std::future::Future;
use std::path::Path;

use branch_sweeper_core::{sweep_branches, BranchName, BranchOutcome, SweepPlan, SweepReport};
use colored::Colorize;
use github_client::GitHubClient;

use crate::{config::SweepConfig, errors::Error};

#[cfg(test)]
#[path = "sweep_cmd_tests.rs"]
mod sweep_cmd_tests;

/// Request structure handed to the sweep function once the operator confirms.
pub struct SweepRequest {
    /// Bearer token presented to the API. Never logged or persisted.
    pub token: String,

    /// The validated repository identity and branch list.
    pub plan: SweepPlan,
}

/// How the command ended: the operator aborted, or the run completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The operator declined the confirmation prompt. Nothing was attempted.
    Aborted,

    /// The run went through the whole list; the report carries the tally.
    Completed(SweepReport),
}

/// Options for the sweep command, grouping the CLI arguments.
pub struct SweepCommandOptions<'a> {
    /// GitHub personal access token supplied on the command line.
    pub token: &'a str,

    /// Path to the TOML file naming the target repository and branches.
    pub config_path: &'a str,
}

impl<'a> SweepCommandOptions<'a> {
    /// Creates new SweepCommandOptions from individual CLI arguments.
    pub fn new(token: &'a str, config_path: &'a str) -> Self {
        Self { token, config_path }
    }
}

/// Handles the complete branch deletion workflow.
///
/// This function orchestrates the run by:
/// 1. Loading and validating the deletion targets from the configuration file
/// 2. Printing the banner, the repository identity, and the full branch list
/// 3. Prompting the operator for a single yes/no confirmation
/// 4. On affirmation, delegating to the supplied sweep function and printing
///    the summary
///
/// The function is designed to be testable through dependency injection of
/// the user input and sweep functions.
///
/// # Arguments
///
/// * `options` - The token and configuration path from the CLI
/// * `ask_user_for_value` - Function to prompt the operator for confirmation
/// * `sweep_fn` - Function to perform the actual deletions
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SweepOutcome::Aborted)` - The operator declined; nothing was attempted
/// - `Ok(SweepOutcome::Completed(report))` - The run finished with the given tally
/// - `Err(Error)` - If configuration loading or validation fails
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration file cannot be read or parsed
/// - A name in the configuration fails validation
/// - The confirmation prompt cannot be read
pub async fn handle_sweep_command<F, Fut, AskFn>(
    options: SweepCommandOptions<'_>,
    ask_user_for_value: AskFn,
    sweep_fn: F,
) -> Result<SweepOutcome, Error>
where
    F: Fn(SweepRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<SweepReport, Error>> + Send,
    AskFn: Fn(&str) -> Result<String, Error>,
{
    let config = SweepConfig::load(Path::new(options.config_path))?;
    let plan = config.into_plan()?;

    println!("{}", "=".repeat(50));
    println!("BranchSweeper");
    println!("{}", "=".repeat(50));
    println!();
    println!("Repository: {}/{}", plan.owner, plan.repo);
    println!("Branches to delete: {}", plan.branches.len());
    println!();
    println!("Branches:");
    for branch in &plan.branches {
        println!("  - {}", branch);
    }
    println!();

    let answer = ask_user_for_value("Proceed with deletion? (y/n): ")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        println!("Aborted.");
        return Ok(SweepOutcome::Aborted);
    }

    let request = SweepRequest {
        token: options.token.to_string(),
        plan,
    };
    let report = sweep_fn(request).await?;

    println!();
    println!("{}", "=".repeat(50));
    println!("Summary");
    println!("{}", "=".repeat(50));
    println!("Successfully deleted: {} branches", report.deleted);
    println!("Failed/Already deleted: {} branches", report.failed);
    println!();
    println!("Done!");

    Ok(SweepOutcome::Completed(report))
}

/// Deletes the planned branches using a token-authenticated GitHub client.
///
/// This is the production sweep function handed to [`handle_sweep_command`];
/// it builds the client from the supplied token and prints each branch's
/// outcome as the run progresses.
///
/// # Errors
///
/// Returns an `Error::Auth` if the GitHub client cannot be built from the
/// token. Individual deletion failures are not errors; they are tallied in
/// the returned report.
pub async fn run_sweep(request: SweepRequest) -> Result<SweepReport, Error> {
    let octocrab = github_client::create_token_client(&request.token)
        .map_err(|e| Error::Auth(format!("Failed to build the GitHub client: {}", e)))?;
    let client = GitHubClient::new(octocrab);

    println!("Deleting branches...");
    println!();

    let report = sweep_branches(&client, &request.plan, print_outcome).await;
    Ok(report)
}

fn print_outcome(branch: &BranchName, outcome: BranchOutcome) {
    match outcome {
        BranchOutcome::Deleted => {
            println!("Deleting {}... {}", branch, "✓ deleted".green());
        }
        BranchOutcome::Failed => {
            println!(
                "Deleting {}... {}",
                branch,
                "✗ failed (may already be deleted or you lack permissions)".red()
            );
        }
    }
}
