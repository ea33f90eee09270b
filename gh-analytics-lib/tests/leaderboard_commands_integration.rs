//! Integration tests for the leaderboard commands.
//!
//! Each test writes a small data archive into a temporary directory and drives
//! the full `run` entry point against it: decode, aggregate, rank, and report.

use camino::Utf8PathBuf;
use flate2::Compression;
use flate2::write::GzEncoder;
use gh_analytics_lib::Host;
use tempfile::TempDir;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {}
}

const ACTORS: &str = "\
id,username
1,alice
2,bob
3,carol
4,dependabot[bot]
";

const REPOS: &str = "\
id,name
r1,acme/widgets
r2,acme/gadgets
r3,bots/automation
";

// e9 watches a repository missing from the repos table; e10 comes from an actor
// missing from the actors table.
const EVENTS: &str = "\
id,type,actor_id,repo_id
e1,PushEvent,1,r1
e2,PushEvent,2,r2
e3,PullRequestEvent,2,r1
e4,PullRequestEvent,3,r2
e5,WatchEvent,3,r1
e6,WatchEvent,1,r1
e7,WatchEvent,2,r2
e8,PushEvent,4,r3
e9,WatchEvent,1,r99
e10,PushEvent,9,r2
e11,IssuesEvent,1,r1
";

const COMMITS: &str = "\
sha,message,event_id
c1,first,e1
c2,second,e1
c3,\"third, with a comma\",e1
c4,fix,e2
c5,bump,e8
c6,bump,e8
c7,bump,e8
c8,bump,e8
c9,bump,e8
c10,ghost,e10
c11,ghost,e10
c12,orphan,e404
";

fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, contents) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, contents.as_bytes()).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// A temporary directory holding `data.tar.gz` with the given entries.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(entries: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.tar.gz"), build_archive(entries)).unwrap();
        Self { dir }
    }

    fn standard() -> Self {
        Self::new(&[
            ("data/actors.csv", ACTORS),
            ("data/commits.csv", COMMITS),
            ("data/events.csv", EVENTS),
            ("data/repos.csv", REPOS),
        ])
    }

    fn path(&self, name: &str) -> String {
        Utf8PathBuf::try_from(self.dir.path().join(name)).unwrap().into_string()
    }

    fn archive(&self) -> String {
        self.path("data.tar.gz")
    }

    /// Write a config file; passing it explicitly keeps any `gh-analytics.toml` in the working directory out.
    fn config(&self, contents: &str) -> String {
        let path = self.path("gh-analytics.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }
}

/// Run a leaderboard command with colors off, so output is the same whether or not stdout is a terminal.
async fn run(host: &mut TestHost, args: &[&str]) -> gh_analytics_lib::Result<()> {
    let argv = core::iter::once("gh-analytics").chain(args.iter().copied()).chain(["--color", "never"]);
    gh_analytics_lib::run(host, argv).await
}

/// Usernames (or names) of the console lines following the title, in order.
fn console_names(output: &str, label: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .map(|line| {
            let after_label = line.split_once(&format!("{label}: ")).unwrap().1;
            after_label.split('|').next().unwrap().trim().to_string()
        })
        .collect()
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_top_users_console() {
    let fixture = Fixture::standard();
    let config = fixture.config("");
    let mut host = TestHost::new();

    run(&mut host, &["top-users", "-p", &fixture.archive(), "-c", &config])
        .await
        .unwrap();

    let output = host.output_str();
    assert!(output.starts_with("top 10 active users:\n"), "got: {output}");
    assert_eq!(console_names(&output, "username"), ["alice", "bob", "carol"]);
    assert!(output.contains(&format!("activity: {:>10}| pushed commits: {:>5}|", 3, 3)));
    assert!(!output.contains("dependabot"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_top_users_with_bots() {
    let fixture = Fixture::standard();
    let config = fixture.config("");
    let mut host = TestHost::new();

    run(&mut host, &["top-users", "--bots", "-n", "2", "-p", &fixture.archive(), "-c", &config])
        .await
        .unwrap();

    let output = host.output_str();
    assert!(output.starts_with("top 2 active users:\n"));
    assert_eq!(console_names(&output, "username"), ["dependabot[bot]", "alice"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_top_users_respects_config() {
    let fixture = Fixture::standard();
    let config = fixture.config("top_n = 1\ninclude_bots = true\n");
    let mut host = TestHost::new();

    run(&mut host, &["top-users", "-p", &fixture.archive(), "-c", &config]).await.unwrap();

    assert_eq!(console_names(&host.output_str(), "username"), ["dependabot[bot]"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_no_bots_overrides_config() {
    let fixture = Fixture::standard();
    let config = fixture.config("top_n = 1\ninclude_bots = true\n");
    let mut host = TestHost::new();

    run(&mut host, &["top-users", "--no-bots", "-p", &fixture.archive(), "-c", &config]).await.unwrap();

    assert_eq!(console_names(&host.output_str(), "username"), ["alice"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_top_repos_by_commits_csv() {
    let fixture = Fixture::standard();
    let config = fixture.config("");
    let csv_path = fixture.path("report.csv");
    let mut host = TestHost::new();

    run(
        &mut host,
        &["top-repos-by-commits", "-n", "3", "-p", &fixture.archive(), "-c", &config, "--csv", &csv_path],
    )
    .await
    .unwrap();

    // r1 and r2 tie on 3 commits and are ordered by id
    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "rank,id,name,commits_pushed\n1,r3,bots/automation,5\n2,r1,acme/widgets,3\n3,r2,acme/gadgets,3\n"
    );
    assert!(host.output_str().is_empty(), "console output should be off when a report file is requested");
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_top_repos_by_watch_events_json_and_console() {
    let fixture = Fixture::standard();
    let config = fixture.config("");
    let json_path = fixture.path("report.json");
    let mut host = TestHost::new();

    run(
        &mut host,
        &["top-repos-by-watch-events", "-p", &fixture.archive(), "-c", &config, "--json", &json_path, "--console"],
    )
    .await
    .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed["title"], "top 10 repositories by watch events");

    let entries = parsed["entries"].as_array().unwrap();
    let ranked: Vec<_> = entries.iter().map(|e| (e["id"].as_str().unwrap(), e["watch_events"].as_u64().unwrap())).collect();
    assert_eq!(ranked, [("r1", 2), ("r2", 1), ("r99", 1), ("r3", 0)]);
    assert_eq!(entries[2]["name"], "");

    assert!(host.output_str().starts_with("top 10 repositories by watch events:\n"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_unknown_repos_can_be_dropped() {
    let fixture = Fixture::standard();
    let config = fixture.config("include_unknown_repos = false\n");
    let mut host = TestHost::new();

    run(&mut host, &["top-repos-by-watch-events", "-p", &fixture.archive(), "-c", &config])
        .await
        .unwrap();

    assert_eq!(console_names(&host.output_str(), "name"), ["acme/widgets", "acme/gadgets", "bots/automation"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_archive_from_config() {
    let fixture = Fixture::standard();
    let config = fixture.config(&format!("archive = {:?}\n", fixture.archive()));
    let mut host = TestHost::new();

    run(&mut host, &["top-repos-by-commits", "-n", "1", "-c", &config]).await.unwrap();

    assert_eq!(console_names(&host.output_str(), "name"), ["bots/automation"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_custom_table_names() {
    let fixture = Fixture::new(&[
        ("./export/people.csv", ACTORS),
        ("./export/commits.csv", COMMITS),
        ("./export/events.csv", EVENTS),
    ]);
    let config = fixture.config(
        "[tables]\nactors = \"export/people.csv\"\ncommits = \"export/commits.csv\"\nevents = \"export/events.csv\"\nrepos = \"export/repos.csv\"\n",
    );
    let mut host = TestHost::new();

    run(&mut host, &["top-users", "-p", &fixture.archive(), "-c", &config]).await.unwrap();

    assert_eq!(console_names(&host.output_str(), "username"), ["alice", "bob", "carol"]);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_zero_is_rejected() {
    let fixture = Fixture::standard();
    let config = fixture.config("");
    let mut host = TestHost::new();

    let result = run(&mut host, &["top-users", "-n", "0", "-p", &fixture.archive(), "-c", &config]).await;

    assert!(result.unwrap_err().to_string().contains("n should be at least 1, got 0"));
    assert!(host.output_str().is_empty());
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_missing_archive() {
    let fixture = Fixture::standard();
    let config = fixture.config("");
    let missing = fixture.path("missing.tar.gz");
    let mut host = TestHost::new();

    let result = run(&mut host, &["top-users", "-p", &missing, "-c", &config]).await;

    let message = result.unwrap_err().to_string();
    assert!(message.contains("unable to open archive"), "got: {message}");
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_missing_table() {
    let fixture = Fixture::new(&[
        ("data/actors.csv", ACTORS),
        ("data/commits.csv", COMMITS),
        ("data/events.csv", EVENTS),
    ]);
    let config = fixture.config("");
    let mut host = TestHost::new();

    // the user leaderboard does not need the repos table
    run(&mut host, &["top-users", "-p", &fixture.archive(), "-c", &config]).await.unwrap();

    let result = run(&mut host, &["top-repos-by-commits", "-p", &fixture.archive(), "-c", &config]).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("data/repos.csv"), "got: {message}");
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_empty_tables() {
    let fixture = Fixture::new(&[
        ("data/actors.csv", "id,username\n"),
        ("data/commits.csv", "sha,message,event_id\n"),
        ("data/events.csv", "id,type,actor_id,repo_id\n"),
    ]);
    let config = fixture.config("");
    let mut host = TestHost::new();

    run(&mut host, &["top-users", "-n", "5", "-p", &fixture.archive(), "-c", &config]).await.unwrap();

    assert_eq!(host.output_str(), "top 5 active users:\n");
}
