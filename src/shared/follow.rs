//! Follow Data Structures
//!
//! Wire types for the follow endpoints. The validated edge type itself lives
//! in `backend::follow`, next to the guard that is allowed to build it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored follow relationship as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Follow {
    #[serde(skip)]
    pub id: i64,
    /// Username of the follower
    pub user: String,
    #[serde(skip)]
    pub user_id: Uuid,
    /// Username of the followed user
    pub following: String,
    #[serde(skip)]
    pub following_id: Uuid,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/v1/follow/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowPayload {
    /// Username of the user to follow
    pub following: Option<String>,
}

/// Query string of `GET /api/v1/follow/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FollowSearch {
    /// Terms separated by whitespace or commas; a row must contain every
    /// term, case-insensitively, in the followed username
    pub search: Option<String>,
}

impl FollowSearch {
    /// The individual search terms, empty when there is nothing to filter on
    pub fn terms(&self) -> Vec<&str> {
        self.search
            .as_deref()
            .map(|raw| {
                raw.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|term| !term.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_serializes_usernames_only() {
        let follow = Follow {
            id: 1,
            user: "alice".to_string(),
            user_id: Uuid::new_v4(),
            following: "bob".to_string(),
            following_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&follow).unwrap();
        assert_eq!(json, serde_json::json!({"user": "alice", "following": "bob"}));
    }

    fn search(raw: &str) -> FollowSearch {
        FollowSearch { search: Some(raw.to_string()) }
    }

    #[test]
    fn test_empty_search_is_ignored() {
        assert!(search("  , ").terms().is_empty());
        assert!(FollowSearch::default().terms().is_empty());
        assert_eq!(search("bo").terms(), vec!["bo"]);
    }

    #[test]
    fn test_search_splits_on_whitespace_and_commas() {
        assert_eq!(search(" bo,cat  ka\tt ").terms(), vec!["bo", "cat", "ka", "t"]);
    }
}
