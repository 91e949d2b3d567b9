//! HTTP fetcher for listing pages
//!
//! Builds the shared HTTP client and fetches one listing page at a time.
//! News sites routinely reject obvious bots, so the client carries a
//! realistic browser-like header set and a cookie store, follows redirects
//! up to a bounded hop count, and treats any non-2xx response as an error.

use crate::FetchError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Maximum redirect hops before a fetch is abandoned
const MAX_REDIRECTS: usize = 10;

/// Builds the HTTP client shared by all source workers
///
/// # Arguments
///
/// * `user_agent` - User-Agent header value for every request
/// * `timeout` - Per-request timeout, applied independently to each fetch
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9,vi;q=0.8"),
    );
    headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
    headers.insert(
        "sec-ch-ua",
        HeaderValue::from_static(r#""Google Chrome";v="124", "Not:A-Brand";v="8", "Chromium";v="124""#),
    );
    headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
    headers.insert("sec-ch-ua-platform", HeaderValue::from_static(r#""Windows""#));
    headers.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("cross-site"));
    headers.insert("sec-fetch-user", HeaderValue::from_static("?1"));
    headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .cookie_store(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page and returns its body
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The listing page URL
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(FetchError)` - Timeout, transport failure, or non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Http {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    tracing::debug!("Fetched {} -> {}", url, status);

    if !status.is_success() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })
}
