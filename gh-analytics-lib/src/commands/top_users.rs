use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::analytics::{CommitIndex, IntegrityReport, aggregate_activity, build_users, top_users};
use crate::reports::Leaderboard;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct TopUsersArgs {
    /// Number of users to show (default is taken from the configuration)
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Include bot accounts (usernames ending with `[bot]`)
    #[arg(long, overrides_with = "no_bots")]
    pub bots: bool,

    /// Exclude bot accounts even when the configuration includes them
    #[arg(long, overrides_with = "bots")]
    pub no_bots: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TopUsersArgs {
    /// Whether bots take part, given the configured default. The last of `--bots`/`--no-bots` wins.
    #[must_use]
    pub const fn include_bots(&self, configured: bool) -> bool {
        if self.bots {
            true
        } else if self.no_bots {
            false
        } else {
            configured
        }
    }
}

pub async fn process_top_users<H: Host>(host: &mut H, args: &TopUsersArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common, args.top)?;
    let n = common.top_n;
    let include_bots = args.include_bots(common.config.include_bots);

    let inputs = common.loader.load_user_inputs().await?;
    IntegrityReport::check_users(&inputs).log();

    let index = CommitIndex::build(&inputs.commits);
    let activity = aggregate_activity(&index, &inputs.events);
    let users = build_users(&inputs.actors, &activity, include_bots);
    let top = top_users(users.into_values(), n)?;

    common.report(&Leaderboard::users(&top, n))
}
