//! Aggregation and ranking over decoded records
//!
//! Everything in this module is a pure, synchronous transformation of
//! already-loaded records. Nothing here performs I/O.
//!
//! # Implementation Model
//!
//! The pipeline runs leaf to root:
//!
//! 1. [`CommitIndex`] counts commits per push event id.
//! 2. [`aggregate_activity`] folds events and the index into per-actor
//!    [`ActivityCounters`].
//! 3. [`build_users`] joins actors with their activity, optionally dropping
//!    bot accounts, to produce [`User`]s.
//! 4. [`build_repo_stats`] seeds [`RepoStats`] from the repos table and folds
//!    push and watch events into them.
//! 5. [`top_n`] ranks any [`Ranked`] collection by a numeric key using a
//!    bounded min-heap. Ties are broken by id, ascending.
//!
//! Data-quality problems (commits for unknown events, events for unknown
//! actors or repositories) never fail the pipeline; they simply contribute
//! nothing. [`IntegrityReport`] counts them so callers can warn about them.

mod activity;
mod commit_index;
mod integrity;
mod repos;
mod top_n;
mod users;

pub use activity::{ActivityCounters, aggregate_activity};
pub use commit_index::CommitIndex;
pub use integrity::IntegrityReport;
pub use repos::{RepoRanking, RepoStats, build_repo_stats, top_repos};
pub use top_n::{RankError, Ranked, top_n};
pub use users::{User, build_users, top_users};
