//! Data types for the Google Hotels scraper
//!
//! All types implement Serialize and Deserialize; the field order of
//! `HotelRecord` is the column order of the exported table.

use serde::{Deserialize, Serialize};

/// One hotel listing extracted from a results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    /// Hotel name from the card heading
    pub name: String,
    /// Displayed nightly price, verbatim (e.g. "$199")
    pub price: String,
    /// Accessibility label of the star rating (e.g. "4.5 out of 5 stars")
    pub rating: String,
    /// Amenity names joined with " | "
    pub amenities: String,
}

impl HotelRecord {
    /// Create a new hotel record
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        rating: impl Into<String>,
        amenities: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            rating: rating.into(),
            amenities: amenities.into(),
        }
    }
}

/// Hotels found for one search, in document order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Query the page was requested with
    pub query: String,
    /// One record per hotel card
    pub hotels: Vec<HotelRecord>,
}

impl SearchResult {
    /// Create a new search result
    pub fn new(query: impl Into<String>, hotels: Vec<HotelRecord>) -> Self {
        Self {
            query: query.into(),
            hotels,
        }
    }

    /// Number of hotels found
    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    /// True when the page had no hotel cards
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

/// Raw HTTP response as returned by the fetcher
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

impl RawResponse {
    /// True only for 200 OK; other 2xx codes are not treated as a results page
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
