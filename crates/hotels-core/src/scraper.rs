//! Main hotel scraper API
//!
//! Combines the HTTP client with the hotel card parser: one request, one
//! parse, no retries.

use tracing::{info, warn};

use crate::client::HotelsClient;
use crate::error::{HotelsError, Result};
use crate::parser::{parse_hotels_with, Markers};
use crate::types::SearchResult;

/// Main scraper API for Google Hotels
///
/// # Example
/// ```no_run
/// use hotels_core::HotelScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = HotelScraper::new()?;
///
///     let result = scraper.search("New York").await?;
///     println!("Found {} hotels", result.len());
///
///     Ok(())
/// }
/// ```
pub struct HotelScraper {
    client: HotelsClient,
    markers: Markers,
}

impl HotelScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = HotelsClient::new()?;
        Ok(Self::with_client(client))
    }

    /// Create a new scraper with a custom client.
    ///
    /// Useful for pointing the scraper at another endpoint, e.g. a mock
    /// server in tests.
    pub fn with_client(client: HotelsClient) -> Self {
        Self {
            client,
            markers: Markers::default(),
        }
    }

    /// Replace the structural markers used to find hotel data.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Search hotels for a free-text query.
    ///
    /// # Arguments
    /// * `query` - Search query string (e.g., "New York")
    ///
    /// # Returns
    /// * `Ok(SearchResult)` with hotels in page order, possibly empty
    /// * `Err(HotelsError::UnexpectedStatus)` if the server did not answer 200;
    ///   the body is not parsed in that case
    /// * `Err(HotelsError::InvalidQuery)` if query is empty or whitespace-only
    ///
    /// # Example
    /// ```no_run
    /// use hotels_core::HotelScraper;
    ///
    /// # async fn example() -> Result<(), hotels_core::HotelsError> {
    /// let scraper = HotelScraper::new()?;
    /// let result = scraper.search("Paris").await?;
    /// for hotel in &result.hotels {
    ///     println!("{} - {}", hotel.name, hotel.price);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let response = self.client.fetch(query).await?;

        if !response.is_ok() {
            warn!(status = response.status, "search page request was not successful");
            return Err(HotelsError::UnexpectedStatus(response.status));
        }

        let hotels = parse_hotels_with(&response.body, &self.markers)?;
        info!(count = hotels.len(), "extracted hotels");

        Ok(SearchResult::new(query.trim(), hotels))
    }
}
