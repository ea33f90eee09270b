use crate::records::Commit;
use std::collections::HashMap;

/// Number of commits attributed to each push event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitIndex {
    counts: HashMap<String, u64>,
}

impl CommitIndex {
    /// Count commits per `event_id` in a single pass.
    #[must_use]
    pub fn build<'a>(commits: impl IntoIterator<Item = &'a Commit>) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for commit in commits {
            *counts.entry(commit.event_id.clone()).or_default() += 1;
        }

        Self { counts }
    }

    /// Commits attributed to `event_id`, or 0 when none are.
    #[must_use]
    pub fn commits_for(&self, event_id: &str) -> u64 {
        self.counts.get(event_id).copied().unwrap_or(0)
    }

    /// Number of distinct event ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(sha: &str, event_id: &str) -> Commit {
        Commit::new(sha, "msg", event_id)
    }

    #[test]
    fn test_empty_input() {
        let index = CommitIndex::build(core::iter::empty());
        assert!(index.is_empty());
        assert_eq!(index.commits_for("1"), 0);
    }

    #[test]
    fn test_counts_per_event() {
        let commits = [commit("a", "1"), commit("b", "1"), commit("c", "2")];

        let index = CommitIndex::build(&commits);

        assert_eq!(index.len(), 2);
        assert_eq!(index.commits_for("1"), 2);
        assert_eq!(index.commits_for("2"), 1);
        assert_eq!(index.commits_for("3"), 0);
    }

    #[test]
    fn test_duplicate_commits_are_counted() {
        let commits = [commit("a", "1"), commit("a", "1")];

        assert_eq!(CommitIndex::build(&commits).commits_for("1"), 2);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = [commit("a", "1"), commit("b", "2"), commit("c", "1")];
        let backward = [commit("c", "1"), commit("b", "2"), commit("a", "1")];

        assert_eq!(CommitIndex::build(&forward), CommitIndex::build(&backward));
    }
}
