use serde::{Deserialize, Serialize};

/// A GitHub repository as listed in the repos table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repo {
    pub id: String,
    pub name: String,
}

impl Repo {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
