//! Multi-format leaderboard output
//!
//! This module turns ranked users or repositories into output for human
//! consumption and programmatic processing.
//!
//! # Implementation Model
//!
//! Every writer consumes the same [`Leaderboard`]: a title, the kind of
//! entity being ranked, and the entries in rank order, each carrying an id, a
//! name, and an ordered list of numeric columns. Three generators are provided,
//! each accessed through a `generate` function writing to any `core::fmt::Write`:
//!
//! - **Console**: fixed-width lines with optional ANSI colors
//! - **CSV**: one header row plus one row per entry, with RFC 4180 escaping
//! - **JSON**: a pretty-printed object with the title and an array of entries

mod console;
mod csv;
mod json;
mod leaderboard;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
pub use leaderboard::{Column, Leaderboard, LeaderboardEntry, Subject};
