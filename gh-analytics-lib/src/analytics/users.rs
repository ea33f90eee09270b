use super::{ActivityCounters, RankError, Ranked, top_n};
use crate::records::Actor;
use serde::Serialize;
use std::collections::HashMap;

/// An actor joined with its activity counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub activity: ActivityCounters,
}

impl Ranked for User {
    fn rank_id(&self) -> &str {
        &self.id
    }
}

/// Join actors with their activity, keyed by actor id.
///
/// Actors without an activity entry get zero counters. Bot accounts are left out entirely unless
/// `include_bots` is set. If the same actor id appears twice, the later row wins.
#[must_use]
pub fn build_users<'a>(
    actors: impl IntoIterator<Item = &'a Actor>,
    activity: &HashMap<String, ActivityCounters>,
    include_bots: bool,
) -> HashMap<String, User> {
    actors
        .into_iter()
        .filter(|actor| include_bots || !actor.is_bot())
        .map(|actor| {
            let user = User {
                id: actor.id.clone(),
                username: actor.username.clone(),
                activity: activity.get(&actor.id).copied().unwrap_or_default(),
            };
            (actor.id.clone(), user)
        })
        .collect()
}

/// The `n` most active users, by pushed commits plus created pull requests.
///
/// # Errors
///
/// Returns [`RankError::InvalidArgument`] when `n` is 0.
pub fn top_users(users: impl IntoIterator<Item = User>, n: usize) -> Result<Vec<User>, RankError> {
    top_n(users, n, |user| user.activity.total())
}
