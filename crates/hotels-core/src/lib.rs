//! Google Hotels Scraper Core Library
//!
//! This crate fetches a Google Hotels search page, extracts the hotel
//! listings on it and writes them to a table.
//!
//! # Features
//! - Browser-like single-request HTTP client
//! - Hotel card extraction (name, price, rating, amenities)
//! - CSV and JSON export

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod writer;

// Re-export main types for convenience
pub use client::{ClientConfig, HotelsClient};
pub use error::{HotelsError, Result};
pub use parser::Markers;
pub use scraper::HotelScraper;
pub use types::{HotelRecord, RawResponse, SearchResult};
pub use writer::{save_hotels, OutputFormat, DEFAULT_OUTPUT_FILE};
