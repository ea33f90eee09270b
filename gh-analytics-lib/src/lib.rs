#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for gh-analytics
//!
//! This library holds all functionality of the gh-analytics tool, which
//! computes leaderboards over an archive of GitHub activity.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`records`]: Input records and archive decoding
//! - [`analytics`]: Aggregation and top-N ranking
//! - [`reports`]: Leaderboard output in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod analytics;
#[cfg(not(any(debug_assertions, test)))]
mod analytics;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod records;
#[cfg(not(any(debug_assertions, test)))]
mod records;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
