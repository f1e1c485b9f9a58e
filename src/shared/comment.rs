//! Comment Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Comment {
    /// Comment ID
    pub id: i64,
    /// Username of the author
    pub author: String,
    #[serde(skip)]
    pub author_id: Uuid,
    /// Comment body
    pub text: String,
    /// Creation time, set by the server
    pub created: DateTime<Utc>,
    /// ID of the commented post (read-only, taken from the URL)
    pub post: i64,
}

/// Body of comment create/update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentPayload {
    pub text: Option<String>,
}

impl CommentPayload {
    /// Validate the comment text; partial updates fall back to `existing`
    pub fn into_text(self, existing: Option<&Comment>) -> Result<String, SharedError> {
        match (self.text, existing) {
            (None, Some(comment)) => Ok(comment.text.clone()),
            (text, _) => require_text("text", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_required_on_create() {
        let payload = CommentPayload::default();
        assert_eq!(payload.into_text(None).unwrap_err(), SharedError::required("text"));
    }

    #[test]
    fn test_partial_update_keeps_text() {
        let comment = Comment {
            id: 3,
            author: "bob".to_string(),
            author_id: Uuid::new_v4(),
            text: "first!".to_string(),
            created: Utc::now(),
            post: 1,
        };
        let text = CommentPayload::default().into_text(Some(&comment)).unwrap();
        assert_eq!(text, "first!");
    }
}
