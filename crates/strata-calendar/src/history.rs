//! Recent-activity feed: the latest events from both platforms merged into one
//! newest-first list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;
use crate::source::Source;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Push,
    Create { ref_type: String },
    Watch,
    PullRequest { action: String },
    Commit { message: String },
    Other { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivityEvent {
    pub source: Source,
    pub id: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
    pub repo: String,
    pub url: String,
}

impl ActivityEvent {
    /// One-line description for a feed entry.
    pub fn headline(&self) -> String {
        let r = &self.repo;
        match &self.kind {
            EventKind::Push => format!("Pushed to {r}"),
            EventKind::Create { ref_type } => format!("Created {ref_type} in {r}"),
            EventKind::Watch => format!("Starred {r}"),
            EventKind::PullRequest { action } => format!("{action} PR in {r}"),
            EventKind::Commit { message } => {
                format!("Cm: {}", message.lines().next().unwrap_or_default())
            }
            EventKind::Other { name } => format!("{name} on {r}"),
        }
    }
}

/// Concatenates feeds, orders newest first and keeps at most `limit` entries.
/// Events with equal timestamps keep their feed order.
pub fn merge_recent(
    feeds: impl IntoIterator<Item = Vec<ActivityEvent>>,
    limit: usize,
) -> Vec<ActivityEvent> {
    let mut all: Vec<ActivityEvent> = feeds.into_iter().flatten().collect();
    all.sort_by(|a, b| b.at.cmp(&a.at));
    all.truncate(limit);
    all
}

// --- Payloads ---

#[derive(Deserialize)]
struct PublicEvent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    created_at: DateTime<Utc>,
    repo: EventRepo,
    #[serde(default)]
    payload: EventPayload,
}

#[derive(Deserialize)]
struct EventRepo {
    name: String,
}

#[derive(Deserialize, Default)]
struct EventPayload {
    #[serde(default)]
    ref_type: Option<String>,
    #[serde(default)]
    action: Option<String>,
}

/// Parses a public-events payload. `owner` is stripped from `owner/repo` names.
pub fn parse_public_events(json: &str, owner: &str) -> Result<Vec<ActivityEvent>, ProviderError> {
    let raw: Vec<PublicEvent> = serde_json::from_str(json)?;
    let prefix = format!("{owner}/");
    Ok(raw
        .into_iter()
        .map(|e| {
            let kind = match e.kind.as_str() {
                "PushEvent" => EventKind::Push,
                "CreateEvent" => EventKind::Create {
                    ref_type: e.payload.ref_type.unwrap_or_else(|| "ref".to_string()),
                },
                "WatchEvent" => EventKind::Watch,
                "PullRequestEvent" => EventKind::PullRequest {
                    action: e.payload.action.unwrap_or_else(|| "updated".to_string()),
                },
                _ => EventKind::Other { name: e.kind.clone() },
            };
            let short = e.repo.name.strip_prefix(&prefix).unwrap_or(&e.repo.name).to_string();
            ActivityEvent {
                source: Source::GitHub,
                id: e.id,
                kind,
                at: e.created_at,
                repo: short,
                url: format!("https://github.com/{}", e.repo.name),
            }
        })
        .collect())
}

#[derive(Deserialize)]
struct CommitEntry {
    sha: String,
    html_url: String,
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
    author: CommitAuthor,
}

#[derive(Deserialize)]
struct CommitAuthor {
    date: DateTime<Utc>,
}

/// Parses one repository's commit list into feed events.
pub fn parse_repo_commits(json: &str, repo: &str) -> Result<Vec<ActivityEvent>, ProviderError> {
    let raw: Vec<CommitEntry> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|c| ActivityEvent {
            source: Source::Gitea,
            id: c.sha,
            kind: EventKind::Commit {
                message: c.commit.message,
            },
            at: c.commit.author.date,
            repo: repo.to_string(),
            url: c.html_url,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{ActivityEvent, EventKind, merge_recent, parse_public_events, parse_repo_commits};
    use crate::source::Source;
    use chrono::{TimeZone, Utc};

    fn ev(id: &str, hour: u32) -> ActivityEvent {
        ActivityEvent {
            source: Source::GitHub,
            id: id.to_string(),
            kind: EventKind::Push,
            at: Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap(),
            repo: "r".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn merge_orders_newest_first_and_truncates() {
        let a = vec![ev("a1", 1), ev("a2", 5)];
        let b = vec![ev("b1", 3), ev("b2", 9)];
        let out = merge_recent([a, b], 3);
        let ids: Vec<&str> = out.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "a2", "b1"]);
    }

    #[test]
    fn empty_feed_does_not_block_merge() {
        let out = merge_recent([Vec::new(), vec![ev("x", 2)]], 10);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn headlines_follow_event_kind() {
        let mut e = ev("1", 0);
        assert_eq!(e.headline(), "Pushed to r");
        e.kind = EventKind::Create { ref_type: "branch".into() };
        assert_eq!(e.headline(), "Created branch in r");
        e.kind = EventKind::PullRequest { action: "opened".into() };
        assert_eq!(e.headline(), "opened PR in r");
        e.kind = EventKind::Commit { message: "fix: tiles\n\nlong body".into() };
        assert_eq!(e.headline(), "Cm: fix: tiles");
        e.kind = EventKind::Other { name: "ForkEvent".into() };
        assert_eq!(e.headline(), "ForkEvent on r");
    }

    #[test]
    fn public_events_strip_owner_prefix() {
        let json = r#"[{
            "id": "42", "type": "WatchEvent", "created_at": "2024-03-01T10:00:00Z",
            "repo": {"name": "someone/topo"}, "payload": {"action": "started"}
        }]"#;
        let evs = parse_public_events(json, "someone").unwrap();
        assert_eq!(evs[0].repo, "topo");
        assert_eq!(evs[0].url, "https://github.com/someone/topo");
        assert_eq!(evs[0].headline(), "Starred topo");
    }

    #[test]
    fn repo_commits_become_gitea_events() {
        let json = r#"[{
            "sha": "abc", "html_url": "https://git.example/r/commit/abc",
            "commit": {"message": "init", "author": {"date": "2024-03-02T08:30:00Z"}}
        }]"#;
        let evs = parse_repo_commits(json, "r").unwrap();
        assert_eq!(evs[0].source, Source::Gitea);
        assert_eq!(evs[0].headline(), "Cm: init");
    }
}
