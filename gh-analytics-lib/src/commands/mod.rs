//! Command-line interface and orchestration for gh-analytics
//!
//! This module implements the CLI commands and wires the other modules together
//! to load the data archive, compute a leaderboard, and report it. It handles
//! argument parsing, configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **top-users**: Rank actors by pushed commits plus created pull requests,
//!   optionally including bot accounts
//! - **top-repos-by-commits**: Rank repositories by commits pushed to them
//! - **top-repos-by-watch-events**: Rank repositories by watch events
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. Each leaderboard command follows the
//! same pattern:
//!
//! 1. Set up logging and load configuration
//! 2. Load the needed tables from the archive concurrently
//! 3. Log data-integrity warnings
//! 4. Aggregate and rank
//! 5. Write the leaderboard to the console and/or report files
//!
//! The `common` module holds the shared pieces: logging setup, color mode
//! handling, progress reporting, and report output.

mod common;
mod config;
mod host;
mod init;
mod progress_reporter;
mod run;
mod top_repos;
mod top_users;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use run::run;
pub use top_repos::{TopReposArgs, process_top_repos};
pub use top_users::{TopUsersArgs, process_top_users};
pub use validate::{ValidateArgs, validate_config};
