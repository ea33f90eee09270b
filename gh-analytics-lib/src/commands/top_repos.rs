use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::analytics::{CommitIndex, IntegrityReport, RepoRanking, build_repo_stats, top_repos};
use crate::reports::Leaderboard;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct TopReposArgs {
    /// Number of repositories to show (default is taken from the configuration)
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_top_repos<H: Host>(host: &mut H, args: &TopReposArgs, ranking: RepoRanking) -> Result<()> {
    let mut common = Common::new(host, &args.common, args.top)?;
    let n = common.top_n;
    let include_unknown = common.config.include_unknown_repos;

    let inputs = common.loader.load_repo_inputs().await?;
    IntegrityReport::check_repos(&inputs).log();

    let index = CommitIndex::build(&inputs.commits);
    let stats = build_repo_stats(&inputs.events, &inputs.repos, &index);
    let top = top_repos(stats.into_values(), n, ranking, include_unknown)?;

    common.report(&Leaderboard::repositories(&top, ranking, n))
}
