//! Command-line interface definitions.
//!
//! Every option has a default matching the public endpoints, so running the
//! binary with no arguments scrapes the real sites. Options are read from
//! the command line only; the environment is never consulted.

use clap::Parser;
use std::time::Duration;

/// Command-line arguments for devhn_digest.
///
/// # Examples
///
/// ```sh
/// # Scrape both sources and print compact JSON
/// devhn_digest
///
/// # Only Hacker News stories
/// devhn_digest --tag "hacker news"
///
/// # Point at local fixtures without any politeness delay
/// devhn_digest --devto-url http://localhost:8080 --hn-api-url http://localhost:8081/v0 \
///     --source-delay-ms 0 --item-delay-ms 0 --pretty
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Dev.to front page; story links are appended to it verbatim
    #[arg(long, default_value = "https://dev.to")]
    pub devto_url: String,

    /// Hacker News API base (without trailing slash)
    #[arg(long, default_value = "https://hacker-news.firebaseio.com/v0")]
    pub hn_api_url: String,

    /// Pause between the two sources, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub source_delay_ms: u64,

    /// Pause between Hacker News item requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub item_delay_ms: u64,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Only emit articles carrying this tag (case-insensitive, e.g. "hacker news")
    #[arg(long)]
    pub tag: Option<String>,
}

impl Cli {
    pub fn source_delay(&self) -> Duration {
        Duration::from_millis(self.source_delay_ms)
    }

    pub fn item_delay(&self) -> Duration {
        Duration::from_millis(self.item_delay_ms)
    }
}
