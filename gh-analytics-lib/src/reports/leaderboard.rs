use crate::analytics::{RepoRanking, RepoStats, User};
use strum::IntoStaticStr;

/// What a leaderboard ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Users,
    Repositories,
}

impl Subject {
    /// Label of the name field in every output format.
    #[must_use]
    pub const fn name_label(self) -> &'static str {
        match self {
            Self::Users => "username",
            Self::Repositories => "name",
        }
    }

    /// Console width of the name field.
    #[must_use]
    pub const fn name_width(self) -> usize {
        match self {
            Self::Users => 30,
            Self::Repositories => 50,
        }
    }
}

/// A numeric column of a leaderboard.
///
/// The snake-case form (via `Into<&'static str>`) is the CSV header and JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Activity,
    PushedCommits,
    CreatedPullRequests,
    CommitsPushed,
    WatchEvents,
}

impl Column {
    /// Human-readable label for console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::PushedCommits => "pushed commits",
            Self::CreatedPullRequests => "created pull requests",
            Self::CommitsPushed => "commits pushed",
            Self::WatchEvents => "watch events",
        }
    }

    /// Console width of the value.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Activity => 10,
            _ => 5,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub values: Vec<(Column, u64)>,
}

/// A ranked list ready to be written in any report format.
///
/// Entries are stored in rank order; rank is the 1-based position. The column layout is fixed by
/// the subject and ranking, so an empty leaderboard still carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub title: String,
    pub subject: Subject,
    columns: Vec<Column>,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Leaderboard of the `requested` most active users.
    #[must_use]
    pub fn users(users: &[User], requested: usize) -> Self {
        let columns = vec![Column::Activity, Column::PushedCommits, Column::CreatedPullRequests];
        let entries = users
            .iter()
            .map(|user| LeaderboardEntry {
                id: user.id.clone(),
                name: user.username.clone(),
                values: vec![
                    (Column::Activity, user.activity.total()),
                    (Column::PushedCommits, user.activity.pushed_commits),
                    (Column::CreatedPullRequests, user.activity.created_pull_requests),
                ],
            })
            .collect();

        Self {
            title: format!("top {requested} active users"),
            subject: Subject::Users,
            columns,
            entries,
        }
    }

    /// Leaderboard of the `requested` top repositories by `ranking`.
    #[must_use]
    pub fn repositories(repos: &[RepoStats], ranking: RepoRanking, requested: usize) -> Self {
        let (column, by) = match ranking {
            RepoRanking::CommitsPushed => (Column::CommitsPushed, "pushed commits"),
            RepoRanking::WatchEvents => (Column::WatchEvents, "watch events"),
        };

        let entries = repos
            .iter()
            .map(|repo| LeaderboardEntry {
                id: repo.id.clone(),
                name: repo.name.clone(),
                values: vec![(column, ranking.key(repo))],
            })
            .collect();

        Self {
            title: format!("top {requested} repositories by {by}"),
            subject: Subject::Repositories,
            columns: vec![column],
            entries,
        }
    }

    /// Columns shared by every entry, in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Entries paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
        self.entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }
}
