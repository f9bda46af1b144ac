//! # Domain Models
//!
//! These structs represent the core entities of the notice board.
//! Fields serialize in camelCase (`createdAt`, `isAdmin`) to stay
//! compatible with entries written by earlier deployments.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published announcement shown in the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Unique for the lifetime of the record; never reassigned.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Label that matched a registry entry at creation time. Not
    /// re-validated afterward: removing the category later leaves this
    /// reference dangling on purpose.
    pub category: String,
    /// Milliseconds since epoch; the sole sort key for display order.
    pub created_at: i64,
    pub author: String,
}

impl Notice {
    /// Builds a new notice with a time-ordered id and the current
    /// timestamp. Validation of title/content belongs to the repository;
    /// this constructor only stamps identity and time.
    pub fn new(title: String, content: String, category: String, author: String) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title,
            content,
            category,
            created_at: Utc::now().timestamp_millis(),
            author,
        }
    }
}

/// The authenticated session user. Absence means anonymous visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name, not the login name.
    pub username: String,
    pub is_admin: bool,
}

/// The finite set of views; exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Home,
    Detail,
    Login,
    Admin,
    Create,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_ids_are_unique_per_creation() {
        let a = Notice::new("a".into(), "x".into(), "c".into(), "me".into());
        let b = Notice::new("b".into(), "y".into(), "c".into(), "me".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn notice_serializes_camel_case() {
        let n = Notice::new("t".into(), "c".into(), "cat".into(), "a".into());
        let json = serde_json::to_value(&n).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn user_round_trips() {
        let u = User { username: "系统管理员".into(), is_admin: true };
        let json = serde_json::to_string(&u).unwrap();
        assert!(json.contains("isAdmin"));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, u);
    }
}
