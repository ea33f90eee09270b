use serde::{Deserialize, Serialize};

const BOT_SUFFIX: &str = "[bot]";

/// A GitHub account that generated at least one event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Actor {
    pub id: String,
    pub username: String,
}

impl Actor {
    #[must_use]
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }

    /// Whether this account is automated, i.e. its username ends with `[bot]`.
    ///
    /// The match is case-sensitive: `dependabot[bot]` is a bot, `dependabot[BOT]` is not.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.username.ends_with(BOT_SUFFIX)
    }
}
