use super::CommitIndex;
use crate::records::{Event, EventKind};
use serde::Serialize;
use std::collections::HashMap;

/// Per-actor activity derived from events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityCounters {
    pub pushed_commits: u64,
    pub created_pull_requests: u64,
}

impl ActivityCounters {
    /// Pushed commits plus created pull requests.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.pushed_commits + self.created_pull_requests
    }
}

/// Fold events into activity counters keyed by actor id.
///
/// Push events add the number of commits the index attributes to them; pull request events add
/// one created pull request. Every push or pull request event gives its actor an entry, even when
/// the push carried no known commits. Other event kinds are ignored.
#[must_use]
pub fn aggregate_activity<'a>(index: &CommitIndex, events: impl IntoIterator<Item = &'a Event>) -> HashMap<String, ActivityCounters> {
    let mut activity: HashMap<String, ActivityCounters> = HashMap::new();

    for event in events {
        match event.kind {
            EventKind::Push => {
                activity.entry(event.actor_id.clone()).or_default().pushed_commits += index.commits_for(&event.id);
            }
            EventKind::PullRequest => {
                activity.entry(event.actor_id.clone()).or_default().created_pull_requests += 1;
            }
            EventKind::Watch | EventKind::Other => {}
        }
    }

    activity
}
