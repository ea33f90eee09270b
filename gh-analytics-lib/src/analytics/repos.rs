use super::{CommitIndex, RankError, Ranked, top_n};
use crate::records::{Event, EventKind, Repo};
use serde::Serialize;
use std::collections::HashMap;
use strum::Display;

/// Per-repository activity counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStats {
    pub id: String,
    pub name: String,
    pub commits_pushed: u64,
    pub watch_events: u64,

    /// Whether the repository appears in the repos table. Entries created for unlisted
    /// repository ids have an empty name.
    pub known: bool,
}

impl RepoStats {
    fn seeded(repo: &Repo) -> Self {
        Self {
            id: repo.id.clone(),
            name: repo.name.clone(),
            commits_pushed: 0,
            watch_events: 0,
            known: true,
        }
    }

    fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            commits_pushed: 0,
            watch_events: 0,
            known: false,
        }
    }
}

impl Ranked for RepoStats {
    fn rank_id(&self) -> &str {
        &self.id
    }
}

/// The counter a repository leaderboard is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RepoRanking {
    CommitsPushed,
    WatchEvents,
}

impl RepoRanking {
    /// The value of this counter for `stats`.
    #[must_use]
    pub const fn key(self, stats: &RepoStats) -> u64 {
        match self {
            Self::CommitsPushed => stats.commits_pushed,
            Self::WatchEvents => stats.watch_events,
        }
    }
}

/// Fold push and watch events into per-repository counters, keyed by repository id.
///
/// Every listed repository starts with zero counters. A push event adds its commit count, but
/// only when that count is positive; a push with no known commits leaves no trace. A watch event
/// adds one. Events for repository ids missing from `repos` create an entry with an empty name
/// and `known == false`.
#[must_use]
pub fn build_repo_stats<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    repos: impl IntoIterator<Item = &'a Repo>,
    index: &CommitIndex,
) -> HashMap<String, RepoStats> {
    let mut stats: HashMap<String, RepoStats> = repos.into_iter().map(|repo| (repo.id.clone(), RepoStats::seeded(repo))).collect();

    for event in events {
        match event.kind {
            EventKind::Push => {
                let count = index.commits_for(&event.id);
                if count > 0 {
                    entry_for(&mut stats, &event.repo_id).commits_pushed += count;
                }
            }
            EventKind::Watch => {
                entry_for(&mut stats, &event.repo_id).watch_events += 1;
            }
            EventKind::PullRequest | EventKind::Other => {}
        }
    }

    stats
}

fn entry_for<'a>(stats: &'a mut HashMap<String, RepoStats>, repo_id: &str) -> &'a mut RepoStats {
    stats.entry(repo_id.to_string()).or_insert_with(|| RepoStats::unknown(repo_id))
}

/// The `n` top repositories by the chosen counter.
///
/// Repositories missing from the repos table take part only when `include_unknown` is set.
///
/// # Errors
///
/// Returns [`RankError::InvalidArgument`] when `n` is 0.
pub fn top_repos(
    stats: impl IntoIterator<Item = RepoStats>,
    n: usize,
    ranking: RepoRanking,
    include_unknown: bool,
) -> Result<Vec<RepoStats>, RankError> {
    top_n(
        stats.into_iter().filter(|repo| include_unknown || repo.known),
        n,
        |repo| ranking.key(repo),
    )
}
