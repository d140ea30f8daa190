use std::io;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

mod commands;
mod config;

mod errors;
use commands::sweep_cmd::{handle_sweep_command, run_sweep, SweepCommandOptions, SweepOutcome};
use errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// BranchSweeper CLI: Delete a list of branches from one GitHub repository
#[derive(Parser, Debug)]
#[command(name = "branch-sweeper")]
#[command(about = "Delete a list of branches from one GitHub repository", long_about = None)]
struct Cli {
    /// GitHub personal access token used to authorize the deletions
    token: String,

    /// Path to the TOML file naming the target repository and branches
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILENAME)]
    config: String,
}

fn ask_user_for_value(request: &str) -> Result<String, Error> {
    print!("{}", request);

    io::stdout().flush().map_err(|_| Error::StdOutFlushFailed)?;

    let mut temp = String::new();
    io::stdin().read_line(&mut temp).unwrap();
    Ok(temp.trim().to_string())
}

fn print_usage() {
    println!("Usage: branch-sweeper <GITHUB_TOKEN> [--config <path>]");
    println!();
    println!("You can create a token at: https://github.com/settings/tokens");
    println!("Required scopes: repo (or public_repo for public repositories)");
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("BRANCH_SWEEPER_LOG"))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => {
                print_usage();
                std::process::exit(1);
            }
        },
    };

    // An empty token would only fail once the API rejects every deletion;
    // refuse it up front instead.
    if cli.token.trim().is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let options = SweepCommandOptions::new(&cli.token, &cli.config);
    match handle_sweep_command(options, ask_user_for_value, run_sweep).await {
        Ok(SweepOutcome::Aborted) | Ok(SweepOutcome::Completed(_)) => {
            std::process::exit(0);
        }
        Err(e) => {
            error!("Error: {e}");
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}
