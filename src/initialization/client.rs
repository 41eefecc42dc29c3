//! HTTP client initialization.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::ClientBuilder;

use crate::config::FetcherConfig;

/// Initializes the HTTP client shared by every request of a fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - Per-request timeout from the config
/// - `Content-Type: application/json` on every request
/// - User-Agent header from the config
///
/// `reqwest::Client` is reference-counted internally, so clones handed to
/// request tasks share one connection pool.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &FetcherConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .default_headers(headers)
        .user_agent(config.user_agent.clone())
        .build()
}
