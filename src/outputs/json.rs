//! JSON output for the downstream consumer.
//!
//! The output is a single JSON array of [`Article`] objects. Non-ASCII
//! characters are written as UTF-8, never as `\u` escapes, and nothing else
//! is ever written to stdout.

use crate::models::Article;
use std::io::Write;
use tracing::{info, instrument};

/// Serialize articles as a JSON array, compact or indented.
pub fn render_articles(articles: &[Article], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(articles)
    } else {
        serde_json::to_string(articles)
    }
}

/// Write the rendered array plus a trailing newline to `out`.
#[instrument(level = "info", skip_all, fields(count = articles.len(), pretty = pretty))]
pub fn write_articles<W: Write>(
    out: &mut W,
    articles: &[Article],
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = render_articles(articles, pretty)?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    info!(bytes = json.len(), "Wrote JSON array");
    Ok(())
}
