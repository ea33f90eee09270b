//! Common processing logic shared between the leaderboard commands.

use super::{Host, ProgressReporter};
use super::config::Config;
use crate::Result;
use crate::analytics::RankError;
use crate::records::Loader;
use crate::reports::{Leaderboard, generate_console, generate_csv, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use core::time::Duration;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;
use std::sync::Arc;

/// Log target for command orchestration
const LOG_TARGET: &str = "  commands";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the leaderboard commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to the tar.gz data archive (default is taken from the configuration)
    #[arg(long, short = 'p', value_name = "PATH")]
    pub archive: Option<Utf8PathBuf>,

    /// Path to configuration file (default is `gh-analytics.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Output the leaderboard to a CSV file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Output the leaderboard to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the leaderboard to the console.
    /// If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    pub top_n: usize,
    pub loader: Loader,
    host: &'a mut H,
    color: ColorMode,
    console: bool,
    csv: Option<Utf8PathBuf>,
    json: Option<Utf8PathBuf>,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging, load the configuration, and prepare a loader for the data archive
    ///
    /// The leaderboard size is `requested_top` if given, else the configured `top_n`.
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, or [`RankError::InvalidArgument`]
    /// when the leaderboard size is 0
    pub fn new(host: &'a mut H, args: &CommonArgs, requested_top: Option<usize>) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
        let top_n = resolve_top_n(requested_top, config.top_n)?;
        let archive = args.archive.clone().unwrap_or_else(|| config.archive.clone());
        log::debug!(target: LOG_TARGET, "Using archive '{archive}'");

        let delay = if args.log_level == LogLevel::None {
            Duration::from_millis(300)
        } else {
            Duration::from_hours(365 * 24)
        };

        let use_colors_for_progress = match args.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stderr};
                stderr().is_terminal()
            }
        };

        let progress_reporter = ProgressReporter::new(delay, use_colors_for_progress);
        let loader = Loader::new(archive, config.tables.clone(), Arc::new(progress_reporter));

        Ok(Self {
            config,
            top_n,
            loader,
            host,
            color: args.color,
            console: args.console,
            csv: args.csv.clone(),
            json: args.json.clone(),
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // a second command in the same process keeps the first logger
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    /// Write the leaderboard to every requested destination
    ///
    /// # Errors
    ///
    /// Returns an error if a report file cannot be generated or written
    pub fn report(&mut self, board: &Leaderboard) -> Result<()> {
        let generating_reports = self.csv.is_some() || self.json.is_some();

        if self.console || !generating_reports {
            let mut console_output = String::new();
            let use_colors = match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };
            generate_console(board, use_colors, &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.csv {
            let mut csv_output = String::new();
            generate_csv(board, &mut csv_output)?;
            fs::write(filename, csv_output).into_app_err_with(|| format!("writing CSV report to '{filename}'"))?;
            log::info!(target: LOG_TARGET, "Wrote CSV report to '{filename}'");
        }

        if let Some(filename) = &self.json {
            let mut json_output = String::new();
            generate_json(board, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
            log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
        }

        Ok(())
    }
}

/// Leaderboard size: the command-line value if given, else the configured one
///
/// Checked before the progress reporter starts, so a rejected size leaves nothing running.
fn resolve_top_n(requested: Option<usize>, configured: usize) -> Result<usize, RankError> {
    let n = requested.unwrap_or(configured);
    if n < 1 {
        return Err(RankError::InvalidArgument { n });
    }

    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_size_wins() {
        assert_eq!(resolve_top_n(Some(3), 10), Ok(3));
        assert_eq!(resolve_top_n(None, 10), Ok(10));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(resolve_top_n(Some(0), 10), Err(RankError::InvalidArgument { n: 0 }));
        assert_eq!(resolve_top_n(None, 0), Err(RankError::InvalidArgument { n: 0 }));
    }
}
