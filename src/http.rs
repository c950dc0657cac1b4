//! Single-attempt HTTP GET helpers shared by the scrapers.
//!
//! Every request is tried exactly once. Failures are returned as a
//! [`FetchError`] so each scraper can decide whether it drops the whole
//! source or a single item.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::utils::truncate_for_log;

/// Why a GET did not produce a usable body.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server could not be reached (DNS, connect, TLS, reset...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read.
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON we expected.
    #[error("unexpected JSON from {url}: {source} (body: {preview})")]
    Decode {
        url: String,
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP status of a [`FetchError::Status`], if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// GET `url` and return its body text when the status is 2xx.
#[instrument(level = "debug", skip(client))]
pub async fn get_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let t0 = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!(
        %status,
        bytes = body.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "GET succeeded"
    );
    Ok(body)
}

/// GET `url` and decode its 2xx body as JSON.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let body = get_text(client, url).await?;
    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        preview: truncate_for_log(&body, 200),
        source,
    })
}
