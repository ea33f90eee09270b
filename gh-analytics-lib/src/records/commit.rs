use serde::{Deserialize, Serialize};

/// A commit introduced by a push event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub event_id: String,
}

impl Commit {
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            event_id: event_id.into(),
        }
    }
}
