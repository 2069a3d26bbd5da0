//! Structural markers of the Google Hotels results page
//!
//! These class names and attributes come from one snapshot of Google's
//! markup. They are the only page-specific knowledge in the extractor, so a
//! markup change means editing this file and nothing else.

/// CSS selectors and attribute names used to locate hotel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// One match per hotel card
    pub card: String,
    /// Heading holding the hotel name
    pub name: String,
    /// Inline element holding the price text
    pub price: String,
    /// Element whose `rating_attr` carries the rating
    pub rating: String,
    /// Attribute read from the rating element
    pub rating_attr: String,
    /// Element holding the "Amenities: a, b, c" text
    pub amenities: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            card: "div[jsname='mutHjb']".to_string(),
            name: "h2[class='BgYkof ogfYpf ykx2he']".to_string(),
            price: "span[jsaction='mouseenter:JttVIc;mouseleave:VqIRre;']".to_string(),
            rating: "span[class='ta47le ']".to_string(),
            rating_attr: "aria-label".to_string(),
            amenities: "span[class='lXJaOd']".to_string(),
        }
    }
}
