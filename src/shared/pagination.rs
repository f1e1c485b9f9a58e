//! Limit/offset pagination
//!
//! Pagination is opt-in: a list is only paginated when the request carries a
//! positive `limit`. Paginated responses use the familiar envelope:
//!
//! ```json
//! { "count": 12, "next": "/api/v1/posts/?limit=5&offset=5", "previous": null, "results": [] }
//! ```

use serde::{Deserialize, Serialize};

/// Raw `limit`/`offset` query parameters
///
/// Kept as strings so that malformed values fall back to the defaults
/// instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitOffsetQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A validated slice request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: i64,
    pub offset: i64,
}

impl LimitOffsetQuery {
    /// The requested window, or `None` when pagination is off
    pub fn window(&self) -> Option<Window> {
        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit > 0)?;
        let offset = self
            .offset
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|offset| *offset >= 0)
            .unwrap_or(0);
        Some(Window { limit, offset })
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Build the envelope for `results`, linking relative to `path`
    pub fn new(results: Vec<T>, count: i64, window: Window, path: &str) -> Self {
        let Window { limit, offset } = window;

        // A window reaching past i64::MAX has no next page
        let next = offset
            .checked_add(limit)
            .filter(|next_offset| *next_offset < count)
            .map(|next_offset| format!("{}?limit={}&offset={}", path, limit, next_offset));

        let previous = if offset <= 0 {
            None
        } else if offset <= limit {
            Some(format!("{}?limit={}", path, limit))
        } else {
            Some(format!("{}?limit={}&offset={}", path, limit, offset - limit))
        };

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}
