use super::Leaderboard;
use crate::Result;
use core::fmt::Write;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert never overwrites here")]
pub fn generate<W: Write>(board: &Leaderboard, writer: &mut W) -> Result<()> {
    let name_label = board.subject.name_label();
    let mut entries = Vec::with_capacity(board.entries.len());

    for (rank, entry) in board.ranked() {
        let mut entry_obj = serde_json::Map::new();
        entry_obj.insert("rank".to_string(), json!(rank));
        entry_obj.insert("id".to_string(), json!(entry.id));
        entry_obj.insert(name_label.to_string(), json!(entry.name));

        for (column, value) in &entry.values {
            entry_obj.insert(column.key().to_string(), json!(value));
        }

        entries.push(json!(entry_obj));
    }

    let output = json!({
        "title": board.title,
        "entries": entries,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{ActivityCounters, RepoRanking, RepoStats, User};

    #[test]
    fn test_empty_leaderboard() {
        let mut output = String::new();
        generate(&Leaderboard::users(&[], 4), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "top 4 active users");
        assert_eq!(parsed["entries"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_users_json() {
        let users = [User {
            id: "1".to_string(),
            username: "alice".to_string(),
            activity: ActivityCounters {
                pushed_commits: 4,
                created_pull_requests: 1,
            },
        }];

        let mut output = String::new();
        generate(&Leaderboard::users(&users, 10), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["entries"][0],
            json!({
                "rank": 1,
                "id": "1",
                "username": "alice",
                "activity": 5,
                "pushed_commits": 4,
                "created_pull_requests": 1,
            })
        );
    }

    #[test]
    fn test_repositories_json() {
        let repos = [
            RepoStats {
                id: "r2".to_string(),
                name: "acme/b".to_string(),
                commits_pushed: 0,
                watch_events: 8,
                known: true,
            },
            RepoStats {
                id: "r9".to_string(),
                name: String::new(),
                commits_pushed: 0,
                watch_events: 3,
                known: false,
            },
        ];

        let mut output = String::new();
        generate(&Leaderboard::repositories(&repos, RepoRanking::WatchEvents, 2), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "top 2 repositories by watch events");
        assert_eq!(parsed["entries"][0]["name"], "acme/b");
        assert_eq!(parsed["entries"][0]["watch_events"], 8);
        assert_eq!(parsed["entries"][1]["rank"], 2);
        assert_eq!(parsed["entries"][1]["name"], "");
    }

    #[test]
    fn test_pretty_formatting() {
        let mut output = String::new();
        generate(&Leaderboard::users(&[], 1), &mut output).unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }
}
