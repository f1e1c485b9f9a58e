//! Group Data Structure
//!
//! Groups are thematic communities posts can be published in. They are
//! read-only over HTTP and created through the store.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

const TITLE_MAX_LEN: usize = 200;
const SLUG_MAX_LEN: usize = 50;

/// A group as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub title: String,
    /// Unique URL-friendly identifier
    pub slug: String,
    pub description: String,
}

/// Fields of a group to be created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGroup {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

impl NewGroup {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }

    /// Check title length and slug format
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::blank("title"));
        }
        if self.title.chars().count() > TITLE_MAX_LEN {
            return Err(SharedError::validation(
                "title",
                format!("Ensure this field has no more than {} characters.", TITLE_MAX_LEN),
            ));
        }
        if !is_valid_slug(&self.slug) {
            return Err(SharedError::validation(
                "slug",
                "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens.",
            ));
        }
        Ok(())
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= SLUG_MAX_LEN
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
