//! Dev.to front page scraper.
//!
//! Fetches the [Dev.to](https://dev.to) home page and reads the story cards
//! straight out of the HTML. Each card is a `div.crayons-story` holding:
//!
//! - `h2.crayons-story__title`: the headline
//! - `a.crayons-story__hidden-navigation`: a relative link such as
//!   `/alice/my-post-1a2b`
//! - `p.crayons-story__description`: an optional excerpt
//!
//! Any of the three may be missing; the record is still emitted with
//! fallback values.

use crate::http::get_text;
use crate::models::{Article, NO_ID, NO_TITLE, Source};
use crate::scrapers::MAX_ARTICLES_PER_SOURCE;
use crate::utils::{joined_trimmed, last_path_segment};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, instrument};

static STORY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.crayons-story").expect("valid story selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2.crayons-story__title").expect("valid title selector"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a.crayons-story__hidden-navigation").expect("valid link selector")
});
static EXCERPT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p.crayons-story__description").expect("valid excerpt selector")
});

/// Scrape the first few stories from the Dev.to front page.
///
/// A single GET is issued against `base_url`. If it fails at the transport
/// level or returns a non-success status the error is logged and an empty
/// list is returned; the caller never sees an error.
#[instrument(level = "info", skip(client))]
pub async fn scrape_articles(client: &Client, base_url: &str) -> Vec<Article> {
    let html = match get_text(client, base_url).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, url = %base_url, "Dev.to fetch failed; skipping source");
            return Vec::new();
        }
    };

    let articles = parse_front_page(&html, base_url);
    info!(count = articles.len(), source = %base_url, "Scraped Dev.to articles");
    articles
}

/// Turn a Dev.to front page into at most [`MAX_ARTICLES_PER_SOURCE`] articles.
///
/// Cards are taken in document order. `base_url` is prefixed verbatim to
/// each relative link and used on its own when a card has no link.
pub fn parse_front_page(html: &str, base_url: &str) -> Vec<Article> {
    let document = Html::parse_document(html);
    document
        .select(&STORY_SELECTOR)
        .take(MAX_ARTICLES_PER_SOURCE)
        .map(|story| story_to_article(story, base_url))
        .collect()
}

fn story_to_article(story: ElementRef<'_>, base_url: &str) -> Article {
    let title = story
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| joined_trimmed(el.text()))
        .unwrap_or_else(|| NO_TITLE.to_string());

    // An anchor without an href is treated the same as no anchor.
    let link = story
        .select(&LINK_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty());

    let excerpt = story
        .select(&EXCERPT_SELECTOR)
        .next()
        .map(|el| joined_trimmed(el.text()))
        .unwrap_or_default();

    let (id, url) = match link {
        Some(href) => (
            last_path_segment(href).to_string(),
            format!("{base_url}{href}"),
        ),
        None => {
            debug!(%title, "Dev.to story has no link");
            (NO_ID.to_string(), base_url.to_string())
        }
    };

    Article {
        id,
        title,
        url,
        content: excerpt.clone(),
        excerpt,
        tags: Source::DevTo.tags(),
    }
}
