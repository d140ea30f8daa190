//! Configuration management for the BranchSweeper CLI.
//!
//! This module loads the deletion targets for a run from a TOML file: the
//! target repository identity and the ordered list of branches to delete.
//! Keeping the list in a file rather than in source means the tool can be
//! pointed at a new repository without a rebuild.
//!
//! The configuration is intentionally small; the credential is never part of
//! it and is only ever accepted on the command line.

use std::{fs, path::Path};

use branch_sweeper_core::SweepPlan;
use serde::Deserialize;
use tracing::debug;

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "branches.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Deletion targets for one run, loaded from a TOML file.
///
/// # Example TOML Configuration
///
/// ```toml
/// owner = "example-org"
/// repo = "example-repo"
/// branches = [
///     "stale/one",
///     "stale/two",
/// ]
/// ```
#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    /// Owner (user or organization) of the target repository.
    pub owner: String,

    /// Name of the target repository.
    pub repo: String,

    /// Branches to delete, in the order they will be attempted.
    pub branches: Vec<String>,
}

impl SweepConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path to the configuration file to load
    ///
    /// # Errors
    ///
    /// Returns an `Error::Config` if:
    /// - The specified file does not exist
    /// - The file cannot be read due to permissions or I/O issues
    /// - The file contains invalid TOML or doesn't match the expected schema
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: SweepConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        debug!(
            owner = config.owner,
            repo = config.repo,
            branch_count = config.branches.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validates the raw configuration names into a sweep plan.
    ///
    /// # Errors
    ///
    /// Returns an `Error::InvalidName` if the owner, repository, or any
    /// branch name fails validation.
    pub fn into_plan(self) -> Result<SweepPlan, Error> {
        let plan = SweepPlan::from_parts(self.owner, self.repo, self.branches)?;
        Ok(plan)
    }
}
