//! Input records and the machinery that decodes them from the data archive
//!
//! The data set is a gzip-compressed tarball holding four CSV tables: actors,
//! commits, events and repositories. Each table maps onto one record type in
//! this module, deserialized with serde straight from the CSV headers.
//!
//! # Implementation Model
//!
//! - [`archive`] streams the tarball, finds a single CSV entry by path, and
//!   decodes its rows into a `Vec` of records.
//! - [`Loader`] fans out one blocking task per table so that the tables needed
//!   by a command are decoded concurrently, then joins them. The first failure
//!   fails the whole load.
//! - [`Progress`] lets the caller observe how many tables have been decoded.
//!
//! Records are plain owned data; nothing here interprets the relationships
//! between tables. That is the job of the `analytics` module.

pub mod archive;

mod actor;
mod commit;
mod event;
mod loader;
mod progress;
mod repo;

pub use actor::Actor;
pub use archive::TableNotFound;
pub use commit::Commit;
pub use event::{Event, EventKind};
pub use loader::{Loader, RepoInputs, TableNames, UserInputs};
pub use progress::Progress;
pub use repo::Repo;
