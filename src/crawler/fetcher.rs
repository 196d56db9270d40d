//! HTTP fetching
//!
//! One GET per visited URL, no custom headers, default redirect handling.
//! Any transport failure or non-success status is a fetch error carrying the
//! URL, and fetch errors are fatal to the whole crawl.

use crate::{CrawlError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for the whole crawl
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
}

/// Fetches `url` and returns the response body bytes
///
/// The URL is used exactly as discovered; a relative href that reaches this
/// point fails here, like any other unreachable target.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| CrawlError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let body = response.bytes().await.map_err(|source| CrawlError::Fetch {
        url: url.to_string(),
        source,
    })?;

    Ok(body.to_vec())
}
