use super::archive::decode_table_by_path;
use super::{Actor, Commit, Event, Progress, Repo};
use crate::Result;
use camino::Utf8PathBuf;
use core::sync::atomic::{AtomicU64, Ordering};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Log target for table loading
const LOG_TARGET: &str = "    loader";

/// Paths of the four CSV tables inside the archive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableNames {
    #[serde(default = "default_actors")]
    pub actors: String,

    #[serde(default = "default_commits")]
    pub commits: String,

    #[serde(default = "default_events")]
    pub events: String,

    #[serde(default = "default_repos")]
    pub repos: String,
}

fn default_actors() -> String {
    "data/actors.csv".to_string()
}

fn default_commits() -> String {
    "data/commits.csv".to_string()
}

fn default_events() -> String {
    "data/events.csv".to_string()
}

fn default_repos() -> String {
    "data/repos.csv".to_string()
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            actors: default_actors(),
            commits: default_commits(),
            events: default_events(),
            repos: default_repos(),
        }
    }
}

/// The tables needed to rank users.
#[derive(Debug, Clone, Default)]
pub struct UserInputs {
    pub actors: Vec<Actor>,
    pub commits: Vec<Commit>,
    pub events: Vec<Event>,
}

/// The tables needed to rank repositories.
#[derive(Debug, Clone, Default)]
pub struct RepoInputs {
    pub repos: Vec<Repo>,
    pub commits: Vec<Commit>,
    pub events: Vec<Event>,
}

/// Loads input tables from a data archive, decoding independent tables concurrently.
pub struct Loader {
    archive: Utf8PathBuf,
    tables: TableNames,
    progress: Arc<dyn Progress>,
}

impl core::fmt::Debug for Loader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Loader")
            .field("archive", &self.archive)
            .field("tables", &self.tables)
            .field("progress", &"<dyn Progress>")
            .finish()
    }
}

impl Loader {
    #[must_use]
    pub fn new(archive: impl Into<Utf8PathBuf>, tables: TableNames, progress: Arc<dyn Progress>) -> Self {
        Self {
            archive: archive.into(),
            tables,
            progress,
        }
    }

    /// Load the actors, commits, and events tables.
    pub async fn load_user_inputs(&self) -> Result<UserInputs> {
        let start = Instant::now();
        let finished = self.start_loading(3);

        let result = tokio::try_join!(
            self.load_table::<Actor>(&self.tables.actors, &finished),
            self.load_table::<Commit>(&self.tables.commits, &finished),
            self.load_table::<Event>(&self.tables.events, &finished),
        );
        self.progress.done();

        let (actors, commits, events) = result?;
        log::info!(target: LOG_TARGET, "Loaded user inputs from '{}' in {:.3}s", self.archive, start.elapsed().as_secs_f64());

        Ok(UserInputs { actors, commits, events })
    }

    /// Load the repos, commits, and events tables.
    pub async fn load_repo_inputs(&self) -> Result<RepoInputs> {
        let start = Instant::now();
        let finished = self.start_loading(3);

        let result = tokio::try_join!(
            self.load_table::<Repo>(&self.tables.repos, &finished),
            self.load_table::<Commit>(&self.tables.commits, &finished),
            self.load_table::<Event>(&self.tables.events, &finished),
        );
        self.progress.done();

        let (repos, commits, events) = result?;
        log::info!(target: LOG_TARGET, "Loaded repository inputs from '{}' in {:.3}s", self.archive, start.elapsed().as_secs_f64());

        Ok(RepoInputs { repos, commits, events })
    }

    fn start_loading(&self, num_tables: u64) -> Arc<AtomicU64> {
        let finished = Arc::new(AtomicU64::new(0));
        let finished_clone = Arc::clone(&finished);

        self.progress.set_phase("Loading");
        self.progress.set_determinate(Box::new(move || {
            let done = finished_clone.load(Ordering::Relaxed);
            (num_tables, done, format!("{done}/{num_tables} tables"))
        }));

        finished
    }

    async fn load_table<T>(&self, csv_name: &str, finished: &Arc<AtomicU64>) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let archive = self.archive.clone();
        let csv_name = csv_name.to_string();
        let finished = Arc::clone(finished);

        log::debug!(target: LOG_TARGET, "Starting to load '{csv_name}'");

        // each table reopens the archive so tasks share nothing but the counter
        tokio::task::spawn_blocking(move || -> Result<Vec<T>> {
            let rows = decode_table_by_path(&archive, &csv_name)?;
            let _ = finished.fetch_add(1, Ordering::Relaxed);
            Ok(rows)
        })
        .await?
    }
}
