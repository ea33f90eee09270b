use crate::records::{Commit, Event, EventKind, RepoInputs, UserInputs};
use std::collections::HashSet;

/// Log target for data-quality warnings
const LOG_TARGET: &str = " integrity";

/// Counts of rows that reference things the data set does not contain.
///
/// These rows never fail a computation; they simply contribute nothing to it. The report exists
/// so that callers can tell a quiet leaderboard from a broken data set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Commits whose `event_id` matches no push event.
    pub orphan_commits: u64,

    /// Events whose `actor_id` is not in the actors table.
    pub unknown_actor_events: u64,

    /// Events whose `repo_id` is not in the repos table.
    pub unknown_repo_events: u64,
}

impl IntegrityReport {
    /// Check the tables loaded for a user leaderboard.
    #[must_use]
    pub fn check_users(inputs: &UserInputs) -> Self {
        let actor_ids: HashSet<&str> = inputs.actors.iter().map(|a| a.id.as_str()).collect();

        Self {
            orphan_commits: count_orphan_commits(&inputs.commits, &inputs.events),
            unknown_actor_events: count(inputs.events.iter().filter(|e| !actor_ids.contains(e.actor_id.as_str()))),
            unknown_repo_events: 0,
        }
    }

    /// Check the tables loaded for a repository leaderboard.
    #[must_use]
    pub fn check_repos(inputs: &RepoInputs) -> Self {
        let repo_ids: HashSet<&str> = inputs.repos.iter().map(|r| r.id.as_str()).collect();

        Self {
            orphan_commits: count_orphan_commits(&inputs.commits, &inputs.events),
            unknown_actor_events: 0,
            unknown_repo_events: count(inputs.events.iter().filter(|e| !repo_ids.contains(e.repo_id.as_str()))),
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.orphan_commits == 0 && self.unknown_actor_events == 0 && self.unknown_repo_events == 0
    }

    /// Emit a warning for every non-zero count.
    pub fn log(&self) {
        if self.orphan_commits > 0 {
            log::warn!(target: LOG_TARGET, "{} commit(s) belong to no push event and were ignored", self.orphan_commits);
        }

        if self.unknown_actor_events > 0 {
            log::warn!(target: LOG_TARGET, "{} event(s) reference actors missing from the actors table", self.unknown_actor_events);
        }

        if self.unknown_repo_events > 0 {
            log::warn!(target: LOG_TARGET, "{} event(s) reference repositories missing from the repos table", self.unknown_repo_events);
        }
    }
}

fn count_orphan_commits(commits: &[Commit], events: &[Event]) -> u64 {
    let push_ids: HashSet<&str> = events
        .iter()
        .filter(|e| e.kind == EventKind::Push)
        .map(|e| e.id.as_str())
        .collect();

    count(commits.iter().filter(|c| !push_ids.contains(c.event_id.as_str())))
}

fn count<T>(iter: impl Iterator<Item = T>) -> u64 {
    iter.fold(0, |n, _| n + 1)
}
