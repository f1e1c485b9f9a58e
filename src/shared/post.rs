//! Post Data Structure
//!
//! A post is a piece of text published by a user, optionally with an image
//! path and a group it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};
use crate::shared::serde_ext::double_option;

/// A published post as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Post {
    /// Post ID
    pub id: i64,
    /// Username of the author
    pub author: String,
    /// ID of the author, used for ownership checks
    #[serde(skip)]
    pub author_id: Uuid,
    /// Post body
    pub text: String,
    /// Publication time, set by the server
    pub pub_date: DateTime<Utc>,
    /// Path of the attached image, relative to the media directory
    pub image: Option<String>,
    /// Group ID
    pub group: Option<i64>,
}

/// Validated post fields handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub text: String,
    pub image: Option<String>,
    pub group: Option<i64>,
}

/// Body of `POST`, `PUT` and `PATCH` requests on posts
///
/// `author` and `pub_date` are read-only and ignored when sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub group: Option<Option<i64>>,
}

impl PostPayload {
    /// Validate a full representation (create or `PUT`)
    pub fn into_draft(self) -> Result<PostDraft, SharedError> {
        Ok(PostDraft {
            text: require_text("text", self.text)?,
            image: self.image.flatten(),
            group: self.group.flatten(),
        })
    }

    /// Validate a partial update (`PATCH`) on top of `existing`
    pub fn merge_into(self, existing: &Post) -> Result<PostDraft, SharedError> {
        let text = match self.text {
            Some(text) => require_text("text", Some(text))?,
            None => existing.text.clone(),
        };
        Ok(PostDraft {
            text,
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            group: self.group.unwrap_or(existing.group),
        })
    }
}
