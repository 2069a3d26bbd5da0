//! Error types for the Google Hotels scraper
//!
//! Every failure of the fetch → parse → write pipeline ends up as one
//! `HotelsError` variant. Only `UnexpectedStatus` is meant to be handled by
//! callers; the rest are fatal for the run.

use thiserror::Error;

/// Error type for hotel scraping operations
#[derive(Error, Debug)]
pub enum HotelsError {
    /// HTTP request failed (DNS, connection, TLS, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Search query was empty after trimming
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A structural marker could not be compiled into a CSS selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A hotel card lacks an element the extractor cannot do without
    #[error("Missing expected field '{field}' in hotel card #{card}")]
    MissingField { field: &'static str, card: usize },

    /// Amenities text did not have the `<label>: a, b, c` shape
    #[error("Malformed amenities in hotel card #{card}: {text:?}")]
    MalformedAmenities { card: usize, text: String },

    /// Output file could not be created or written
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for hotel scraping operations
pub type Result<T> = std::result::Result<T, HotelsError>;
