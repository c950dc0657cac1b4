//! Article sources.
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | Dev.to | [`devto`] | HTML scraping of the front page |
//! | Hacker News | [`hackernews`] | Firebase JSON API |
//!
//! Each module exports `scrape_articles(...)`, which never fails: a source
//! that cannot be reached logs the error and contributes no articles. The
//! field mapping lives in a separate pure function per module so it can be
//! tested without a network.

pub mod devto;
pub mod hackernews;

/// How many articles each source contributes at most.
pub const MAX_ARTICLES_PER_SOURCE: usize = 5;
