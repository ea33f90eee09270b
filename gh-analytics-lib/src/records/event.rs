use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// The kinds of event the analytics care about.
///
/// Any other `type` value in the events table decodes as [`EventKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum EventKind {
    /// One or more commits were pushed; the commits reference this event by id.
    Push,
    PullRequest,
    /// A user starred a repository.
    Watch,
    Other,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "PushEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::Watch => "WatchEvent",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value {
            "PushEvent" => Self::Push,
            "PullRequestEvent" => Self::PullRequest,
            "WatchEvent" => Self::Watch,
            _ => Self::Other,
        }
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EventKind> for &'static str {
    fn from(value: EventKind) -> Self {
        value.as_str()
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A single GitHub event, attributed to one actor and one repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub actor_id: String,
    pub repo_id: String,
}

impl Event {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: EventKind, actor_id: impl Into<String>, repo_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            actor_id: actor_id.into(),
            repo_id: repo_id.into(),
        }
    }
}
