//! HTML parsing for Google Hotels result pages
//!
//! - `hotels`: Extract hotel records from hotel cards
//! - `markers`: Class and attribute markers the extractor relies on
//! - `text`: Fragment normalization shared by all fields

pub mod hotels;
pub mod markers;
pub mod text;

// Re-export main parsing functions
pub use hotels::{amenities_from_fragments, parse_amenities, parse_hotels, parse_hotels_with};
pub use markers::Markers;
pub use text::{join_fragments, normalize};
