//! HTTP utilities for stats.nba.com communication

use std::time::Duration;

use crate::core::config::ClientConfig;
use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;

/// stats.nba.com rejects requests that do not look like they come from nba.com.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const NBA_ORIGIN: &str = "https://www.nba.com";

/// Headers required on every stats.nba.com request.
pub fn stats_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(ORIGIN, HeaderValue::from_static(NBA_ORIGIN));
    h.insert(REFERER, HeaderValue::from_str(&format!("{NBA_ORIGIN}/"))?);
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    Ok(h)
}

/// Build the shared client with the configured timeout and default headers.
pub fn build_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .default_headers(stats_header_map()?)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
