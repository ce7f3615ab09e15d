//! Shared types for the parse and build stages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The normalized in-memory representation of one parsed post.
///
/// Constructed once per document per run by [`crate::parse::parse_post`] and
/// never mutated afterwards. Every field has a defined fallback, so a record
/// always exists for every discovered document regardless of how malformed
/// its front matter is.
#[derive(Debug, Clone)]
pub struct Post {
    /// Display title: front-matter `title`, or the filename stem
    pub title: String,
    /// Raw date value as written in front matter, preserved for display.
    /// `"1970-01-01"` when absent.
    pub date: String,
    /// Parsed ISO calendar date used only for ordering. Falls back to the
    /// Unix epoch when `date` is missing or unparsable, so sorting never fails.
    pub date_key: NaiveDate,
    /// Front-matter `tags`; empty when absent or explicitly null
    pub tags: Vec<String>,
    /// Front-matter `summary`; empty when absent or null
    pub summary: String,
    /// Stable external key, derived from the filename stem
    pub slug: String,
    /// Rendered markdown body
    pub body_html: String,
}

impl Post {
    /// The display-facing projection of this post for the JSON index.
    ///
    /// `body_html` and `date_key` deliberately do not appear: the index
    /// carries metadata for listings, not content or internal sort keys.
    pub fn index_entry(&self) -> IndexEntry {
        IndexEntry {
            title: self.title.clone(),
            date: self.date.clone(),
            tags: self.tags.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
        }
    }
}

/// One element of the `posts.json` index.
///
/// Serializes with exactly these five fields and round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub summary: String,
}
