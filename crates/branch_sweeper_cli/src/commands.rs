//! Command modules for the BranchSweeper CLI.
//!
//! This module contains the command implementation for the CLI application:
//!
//! - `sweep_cmd`: The branch deletion workflow (confirmation prompt, deletion
//!   loop, summary output)

pub mod sweep_cmd;
