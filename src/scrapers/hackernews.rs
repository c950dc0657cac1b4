//! Hacker News top stories via the official Firebase API.
//!
//! Two endpoints are used, both relative to the API base
//! (`https://hacker-news.firebaseio.com/v0` by default):
//!
//! - `/topstories.json`: a JSON array of item ids, best first
//! - `/item/{id}.json`: a single item document, or `null`

use crate::http::{FetchError, get_json};
use crate::models::{Article, HackerNewsItem, NO_DESCRIPTION, NO_TITLE, Source};
use crate::scrapers::MAX_ARTICLES_PER_SOURCE;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Fetch the first few top stories.
///
/// The id listing is requested once; on failure the error is logged and an
/// empty list is returned. Only the first [`MAX_ARTICLES_PER_SOURCE`] ids
/// are requested, one after another with `item_delay` between requests.
/// An item whose request fails is dropped and the rest carry on.
#[instrument(level = "info", skip(client))]
pub async fn scrape_articles(client: &Client, api_base: &str, item_delay: Duration) -> Vec<Article> {
    let ids = match index_stories(client, api_base).await {
        Ok(ids) => ids,
        Err(e) => {
            error!(error = %e, "Hacker News listing failed; skipping source");
            return Vec::new();
        }
    };

    let articles: Vec<Article> = stream::iter(ids.into_iter().enumerate())
        .then(|(i, id)| async move {
            if i > 0 && !item_delay.is_zero() {
                sleep(item_delay).await;
            }
            match fetch_story(client, api_base, id).await {
                Ok(Some(article)) => {
                    debug!(id, "Fetched Hacker News story");
                    Some(article)
                }
                Ok(None) => {
                    warn!(id, "Hacker News item is null; skipping");
                    None
                }
                Err(e) => {
                    warn!(id, status = ?e.status(), error = %e, "Hacker News item fetch failed; skipping");
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = articles.len(), "Fetched Hacker News stories");
    articles
}

/// Fetch the top story ids, keeping only the first [`MAX_ARTICLES_PER_SOURCE`].
#[instrument(level = "info", skip(client))]
async fn index_stories(client: &Client, api_base: &str) -> Result<Vec<u64>, FetchError> {
    let url = format!("{api_base}/topstories.json");
    let mut ids: Vec<u64> = get_json(client, &url).await?;
    let listed = ids.len();
    ids.truncate(MAX_ARTICLES_PER_SOURCE);
    info!(listed, kept = ids.len(), "Indexed Hacker News story ids");
    Ok(ids)
}

async fn fetch_story(client: &Client, api_base: &str, id: u64) -> Result<Option<Article>, FetchError> {
    let url = format!("{api_base}/item/{id}.json");
    let item: Option<HackerNewsItem> = get_json(client, &url).await?;
    Ok(item.map(|item| {
        debug!(id, item_id = ?item.id, kind = ?item.r#type, by = ?item.by, score = ?item.score, "Decoded item");
        story_to_article(id, item)
    }))
}

/// Map a raw item onto an [`Article`].
///
/// A missing `text` becomes `"No description"` in `excerpt` but an empty
/// string in `content`. The two defaults differ in the existing output and
/// are kept as they are.
pub fn story_to_article(id: u64, item: HackerNewsItem) -> Article {
    Article {
        id: id.to_string(),
        title: item.title.unwrap_or_else(|| NO_TITLE.to_string()),
        url: item.url.unwrap_or_default(),
        excerpt: item
            .text
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        content: item.text.unwrap_or_default(),
        tags: Source::HackerNews.tags(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    /// Base url of a localhost port nothing listens on.
    fn closed_port_url() -> String {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        format!("http://127.0.0.1:{port}")
    }

    async fn mock_item<'a>(server: &'a MockServer, id: u64, title: &str) -> httpmock::Mock<'a> {
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/v0/item/{id}.json"));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "id": id,
                        "type": "story",
                        "by": "pg",
                        "score": 100,
                        "title": title,
                        "url": format!("https://example.com/{id}")
                    }));
            })
            .await
    }

    #[test]
    fn test_story_to_article_full_item() {
        let item = HackerNewsItem {
            title: Some("Ask HN: Anyone?".to_string()),
            url: Some("https://example.com".to_string()),
            text: Some("Body text".to_string()),
            ..Default::default()
        };

        let article = story_to_article(7, item);
        assert_eq!(article.id, "7");
        assert_eq!(article.title, "Ask HN: Anyone?");
        assert_eq!(article.url, "https://example.com");
        assert_eq!(article.excerpt, "Body text");
        assert_eq!(article.content, "Body text");
        assert_eq!(article.tags, vec!["Hacker News".to_string()]);
    }

    #[test]
    fn test_story_to_article_empty_item_fallbacks() {
        let article = story_to_article(8, HackerNewsItem::default());
        assert_eq!(article.id, "8");
        assert_eq!(article.title, "No title");
        assert_eq!(article.url, "");
        assert_eq!(article.excerpt, "No description");
        assert_eq!(article.content, "");
    }

    #[tokio::test]
    async fn test_scrape_skips_failed_item_and_stops_at_five() {
        let server = MockServer::start_async().await;
        let listing = server
            .mock_async(|when, then| {
                when.method(GET).path("/v0/topstories.json");
                then.status(200).json_body(json!([1, 2, 3, 4, 5, 6]));
            })
            .await;
        let one = mock_item(&server, 1, "One").await;
        let two = mock_item(&server, 2, "Two").await;
        let three = server
            .mock_async(|when, then| {
                when.method(GET).path("/v0/item/3.json");
                then.status(500);
            })
            .await;
        let four = mock_item(&server, 4, "Four").await;
        let five = mock_item(&server, 5, "Five").await;
        let six = mock_item(&server, 6, "Six").await;

        let articles = scrape_articles(&Client::new(), &server.url("/v0"), Duration::ZERO).await;

        listing.assert_async().await;
        for mock in [&one, &two, &three, &four, &five] {
            mock.assert_hits_async(1).await;
        }
        six.assert_hits_async(0).await;

        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
        assert_eq!(articles[2].title, "Four");
        assert_eq!(articles[2].url, "https://example.com/4");
        assert_eq!(articles[2].excerpt, "No description");
        assert_eq!(articles[2].content, "");
    }

    #[tokio::test]
    async fn test_scrape_listing_failure_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v0/topstories.json");
                then.status(500);
            })
            .await;
        let item = mock_item(&server, 1, "Never").await;

        let articles = scrape_articles(&Client::new(), &server.url("/v0"), Duration::ZERO).await;
        assert!(articles.is_empty());
        item.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_scrape_skips_null_item() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v0/topstories.json");
                then.status(200).json_body(json!([10, 11]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v0/item/10.json");
                then.status(200).body("null");
            })
            .await;
        mock_item(&server, 11, "Eleven").await;

        let articles = scrape_articles(&Client::new(), &server.url("/v0"), Duration::ZERO).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "11");
    }

    #[tokio::test]
    async fn test_scrape_unreachable_api_is_empty() {
        let api_base = format!("{}/v0", closed_port_url());
        let articles = scrape_articles(&Client::new(), &api_base, Duration::ZERO).await;
        assert!(articles.is_empty());
    }
}
