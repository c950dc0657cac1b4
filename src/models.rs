//! Data models for scraped articles.
//!
//! - [`Article`]: the normalized record every source produces
//! - [`Source`]: which upstream a record came from
//! - [`HackerNewsItem`]: the raw item document returned by the Firebase API

use serde::{Deserialize, Serialize};

/// Placeholder id for a Dev.to story with no link.
pub const NO_ID: &str = "No ID";
/// Placeholder title when the source has none.
pub const NO_TITLE: &str = "No title";
/// Placeholder excerpt for a Hacker News item without text.
pub const NO_DESCRIPTION: &str = "No description";

/// A normalized article as emitted on stdout.
///
/// All six fields are always populated; sources fall back to the sentinel
/// constants above (or an empty string) instead of leaving a field out.
/// Field declaration order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// Last path segment of the link (Dev.to) or the numeric story id (Hacker News).
    pub id: String,
    pub title: String,
    /// Absolute address of the item.
    pub url: String,
    pub excerpt: String,
    /// Always a single element naming the source.
    pub tags: Vec<String>,
    /// Mirrors the excerpt; no full-content fetch is performed.
    pub content: String,
}

impl Article {
    /// Whether any tag equals `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// Upstream an [`Article`] was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    DevTo,
    HackerNews,
}

impl Source {
    /// The tag written into [`Article::tags`].
    pub fn tag(self) -> &'static str {
        match self {
            Source::DevTo => "Dev.to",
            Source::HackerNews => "Hacker News",
        }
    }

    pub fn tags(self) -> Vec<String> {
        vec![self.tag().to_string()]
    }
}

/// A Hacker News item as served by `/v0/item/{id}.json`.
///
/// Every field is optional: jobs have no `url`, link stories have no
/// `text`, and deleted items drop almost everything.
#[derive(Debug, Default, Deserialize)]
pub struct HackerNewsItem {
    pub id: Option<u64>,
    pub by: Option<String>,
    pub r#type: Option<String>,
    pub score: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    /// HTML body for Ask HN / text posts.
    pub text: Option<String>,
}
