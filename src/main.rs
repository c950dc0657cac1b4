//! # devhn_digest
//!
//! Pulls the top stories from two developer news sources, normalizes them
//! into one article shape, and prints a JSON array on stdout for another
//! process to consume.
//!
//! ## Sources
//!
//! - Dev.to front page (HTML scraping)
//! - Hacker News top stories (Firebase JSON API)
//!
//! ## Usage
//!
//! ```sh
//! devhn_digest > articles.json
//! RUST_LOG=debug devhn_digest --pretty
//! ```
//!
//! ## Pipeline
//!
//! 1. **Dev.to**: one GET, up to five story cards
//! 2. **Pause**: fixed courtesy delay between sources
//! 3. **Hacker News**: id listing, then up to five item requests, paced
//! 4. **Output**: Dev.to articles followed by Hacker News articles, as JSON
//!
//! A source that fails contributes nothing; the run still succeeds. Logs go
//! to stderr so stdout only ever carries the JSON array.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tokio::time::sleep;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod http;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use models::Article;
use outputs::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr; stdout is reserved for the JSON array) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("devhn_digest starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let client = Client::new();
    let articles = collect_articles(&client, &args).await;

    let stdout = std::io::stdout();
    json::write_articles(&mut stdout.lock(), &articles, args.pretty)?;

    let elapsed = start_time.elapsed();
    info!(
        count = articles.len(),
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Run both scrapers in order and concatenate their results.
///
/// Dev.to articles come first, then Hacker News, each in source order. With
/// `--tag`, only articles carrying that tag (ignoring case) are kept; both
/// sources are still fetched.
#[instrument(level = "info", skip_all)]
async fn collect_articles(client: &Client, args: &Cli) -> Vec<Article> {
    let devto_articles = scrapers::devto::scrape_articles(client, &args.devto_url).await;

    let delay = args.source_delay();
    if !delay.is_zero() {
        debug!(?delay, "Pausing between sources");
        sleep(delay).await;
    }

    let hn_articles =
        scrapers::hackernews::scrape_articles(client, &args.hn_api_url, args.item_delay()).await;

    let devto_count = devto_articles.len();
    let hn_count = hn_articles.len();
    let mut articles = vec![devto_articles, hn_articles]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    if let Some(tag) = &args.tag {
        let before = articles.len();
        articles.retain(|a| a.has_tag(tag));
        debug!(%tag, before, after = articles.len(), "Filtered articles by tag");
    }
    info!(
        total = articles.len(),
        devto_count, hn_count, "Collected articles from all sources"
    );
    articles
}
