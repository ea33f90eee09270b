use crate::Result;
use crate::records::TableNames;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the base directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "gh-analytics.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of entries shown on each leaderboard
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Whether bot accounts take part in the user leaderboard
    #[serde(default)]
    pub include_bots: bool,

    /// Whether repositories missing from the repos table take part in repository leaderboards
    #[serde(default = "default_include_unknown_repos")]
    pub include_unknown_repos: bool,

    /// Data archive used when none is given on the command line
    #[serde(default = "default_archive")]
    pub archive: Utf8PathBuf,

    /// Paths of the CSV tables inside the archive
    #[serde(default)]
    pub tables: TableNames,
}

const fn default_top_n() -> usize {
    10
}

const fn default_include_unknown_repos() -> bool {
    true
}

fn default_archive() -> Utf8PathBuf {
    Utf8PathBuf::from("./samples/data.tar.gz")
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading gh-analytics configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading gh-analytics configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or the table paths are empty or repeated
    pub fn validate(&self) -> Result<()> {
        if self.top_n < 1 {
            return Err(app_err!("top_n must be at least 1, got {}", self.top_n));
        }

        if self.archive.as_str().is_empty() {
            return Err(app_err!("archive must not be empty"));
        }

        let tables = [
            ("actors", &self.tables.actors),
            ("commits", &self.tables.commits),
            ("events", &self.tables.events),
            ("repos", &self.tables.repos),
        ];

        let mut seen = HashSet::new();
        for (key, path) in tables {
            if path.is_empty() {
                return Err(app_err!("tables.{key} must not be empty"));
            }

            if !seen.insert(path.as_str()) {
                return Err(app_err!("tables.{key} repeats the path '{path}' used by another table"));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
