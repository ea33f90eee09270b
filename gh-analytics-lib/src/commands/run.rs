//! Command dispatch logic for gh-analytics

use super::{InitArgs, TopReposArgs, TopUsersArgs, ValidateArgs, init_config, process_top_repos, process_top_users, validate_config};
use crate::analytics::RepoRanking;
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gh-analytics", version, author, long_about = None)]
#[command(about = "Leaderboards over an archive of GitHub activity")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the most active users by pushed commits and created pull requests
    TopUsers(Box<TopUsersArgs>),
    /// Show the repositories with the most pushed commits
    TopReposByCommits(Box<TopReposArgs>),
    /// Show the repositories with the most watch events
    TopReposByWatchEvents(Box<TopReposArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::TopUsers(args) => process_top_users(host, args).await,
        Command::TopReposByCommits(args) => process_top_repos(host, args, RepoRanking::CommitsPushed).await,
        Command::TopReposByWatchEvents(args) => process_top_repos(host, args, RepoRanking::WatchEvents).await,
        Command::Init(args) => init_config(host, args),
        Command::Validate(args) => validate_config(host, args),
    }
}
