//! HTTP client for the Google Hotels search page
//!
//! Sends a single GET per search with a header block copied from a desktop
//! Chrome session, so the server returns the same markup a browser would get.
//! There is no retry and no custom timeout; transport errors go straight back
//! to the caller.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info};

use crate::error::{HotelsError, Result};
use crate::types::RawResponse;

/// Search endpoint on google.com
pub const DEFAULT_ENDPOINT: &str = "https://www.google.com/travel/search";

/// Request headers of Chrome 119 on 64-bit Linux.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("authority", "www.google.com"),
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
    ),
    ("accept-language", "en-GB,en;q=0.9"),
    (
        "sec-ch-ua",
        "\"Google Chrome\";v=\"119\", \"Chromium\";v=\"119\",\"Not?A_Brand\";v=\"24\"",
    ),
    ("sec-ch-ua-arch", "\"x86\""),
    ("sec-ch-ua-bitness", "\"64\""),
    ("sec-ch-ua-full-version", "\"119.0.6045.123\""),
    (
        "sec-ch-ua-full-version-list",
        "\"Google Chrome\";v=\"119.0.6045.123\",\"Chromium\";v=\"119.0.6045.123\", \"Not?A_Brand\";v=\"24.0.0.0\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-model", "\"\""),
    ("sec-ch-ua-platform", "\"Linux\""),
    ("sec-ch-ua-platform-version", "\"6.2.0\""),
    ("sec-ch-ua-wow64", "?0"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
    (
        "user-agent",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    ),
];

/// Configuration for the hotels HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Search endpoint URL without query string (default: google.com travel search)
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// HTTP client that impersonates a desktop browser
pub struct HotelsClient {
    /// Underlying HTTP client with the browser headers preinstalled
    client: reqwest::Client,
    /// Search endpoint URL
    endpoint: String,
}

impl HotelsClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Search endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the full request URL for a query
    pub fn search_url(&self, query: &str) -> String {
        format!("{}?q={}", self.endpoint, urlencoding::encode(query))
    }

    /// Fetch the search results page for `query`
    ///
    /// The response is returned whatever its status; deciding what a non-200
    /// status means is left to the caller.
    ///
    /// # Arguments
    /// * `query` - Free-text search term (e.g., "New York")
    ///
    /// # Errors
    /// - `HotelsError::InvalidQuery` - Query is empty or whitespace-only
    /// - `HotelsError::HttpError` - Network failure or unreadable body
    pub async fn fetch(&self, query: &str) -> Result<RawResponse> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(HotelsError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.search_url(trimmed);
        info!(%url, "fetching hotel search page");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}

/// Header map built from `BROWSER_HEADERS`
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len());
    for &(name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}
