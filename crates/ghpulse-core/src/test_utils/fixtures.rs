//! JSON fixtures shaped like GitHub REST responses

use serde_json::{json, Value};

pub fn repo(owner: &str, name: &str) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "owner": {"login": owner, "id": 1, "type": "User"},
        "private": false,
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "default_branch": "main"
    })
}

pub fn commit(full_name: &str, sha: &str, message: &str, date: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "message": message,
            "author": {"name": "Test Author", "email": "author@example.com", "date": date},
            "committer": {"name": "Test Author", "email": "author@example.com", "date": date}
        },
        "html_url": format!("https://github.com/{}/commit/{}", full_name, sha)
    })
}

pub fn push_event(repo_name: &str, created_at: &str, commits: Vec<Value>) -> Value {
    json!({
        "id": "1",
        "type": "PushEvent",
        "actor": {"login": "user"},
        "repo": {"name": repo_name},
        "payload": {"ref": "refs/heads/main", "commits": commits},
        "public": true,
        "created_at": created_at
    })
}

pub fn push_commit(sha: &str, message: &str, author: &str) -> Value {
    json!({
        "sha": sha,
        "message": message,
        "author": {"name": author, "email": format!("{}@example.com", author.to_lowercase())},
        "distinct": true
    })
}

pub fn watch_event(repo_name: &str, created_at: &str) -> Value {
    json!({
        "id": "2",
        "type": "WatchEvent",
        "repo": {"name": repo_name},
        "payload": {"action": "started"},
        "created_at": created_at
    })
}
