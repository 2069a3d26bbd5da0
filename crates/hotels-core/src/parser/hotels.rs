//! Hotel card parser for Google Hotels search pages
//!
//! Walks every hotel card on a results page and extracts name, price,
//! rating and amenities. A card that lacks a price or whose amenities text
//! is not `<label>: a, b, c` aborts the whole parse.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{HotelsError, Result};
use crate::types::HotelRecord;

use super::markers::Markers;
use super::text::{join_fragments, normalize};

/// Separator between amenity names in the stored value
pub const AMENITY_SEPARATOR: &str = " | ";

/// Markers compiled into selectors, built once per parse.
struct CardSelectors<'m> {
    card: Selector,
    name: Selector,
    price: Selector,
    rating: Selector,
    rating_attr: &'m str,
    amenities: Selector,
}

impl<'m> CardSelectors<'m> {
    fn compile(markers: &'m Markers) -> Result<Self> {
        Ok(Self {
            card: compile_selector(&markers.card)?,
            name: compile_selector(&markers.name)?,
            price: compile_selector(&markers.price)?,
            rating: compile_selector(&markers.rating)?,
            rating_attr: &markers.rating_attr,
            amenities: compile_selector(&markers.amenities)?,
        })
    }
}

fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| HotelsError::InvalidSelector(format!("{}: {:?}", selector, e)))
}

/// Parse hotel listings from Google Hotels search page HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the search results page
///
/// # Returns
/// * `Ok(Vec<HotelRecord>)` in document order, empty if no card matched
/// * `Err(HotelsError)` if any card is missing required data
pub fn parse_hotels(html: &str) -> Result<Vec<HotelRecord>> {
    parse_hotels_with(html, &Markers::default())
}

/// Parse hotel listings using custom structural markers.
pub fn parse_hotels_with(html: &str, markers: &Markers) -> Result<Vec<HotelRecord>> {
    let selectors = CardSelectors::compile(markers)?;
    let document = Html::parse_document(html);

    let hotels = document
        .select(&selectors.card)
        .enumerate()
        .map(|(index, card)| parse_hotel_card(card, index, &selectors))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = hotels.len(), "parsed hotel cards");
    Ok(hotels)
}

/// Extract one record from a hotel card element.
fn parse_hotel_card(card: ElementRef, index: usize, selectors: &CardSelectors) -> Result<HotelRecord> {
    let name = normalize(card.select(&selectors.name).flat_map(own_text));

    // First text node anywhere under the price element, taken verbatim
    let price = card
        .select(&selectors.price)
        .flat_map(|el| el.text())
        .next()
        .ok_or(HotelsError::MissingField {
            field: "price",
            card: index,
        })?
        .to_string();

    let rating = normalize(
        card.select(&selectors.rating)
            .filter_map(|el| el.value().attr(selectors.rating_attr)),
    );

    let amenities =
        amenities_from_fragments(card.select(&selectors.amenities).flat_map(own_text), index)?;

    debug!(card = index, %name, %price, "parsed hotel card");
    Ok(HotelRecord {
        name,
        price,
        rating,
        amenities,
    })
}

/// Text nodes that are direct children of `element`, skipping nested tags.
fn own_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
}

/// Build the stored amenities value from the raw text fragments of a card.
///
/// # Errors
/// `HotelsError::MalformedAmenities` when the joined text has no colon.
pub fn amenities_from_fragments<I, S>(fragments: I, card: usize) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = normalize(fragments);
    parse_amenities(&text).ok_or(HotelsError::MalformedAmenities { card, text })
}

/// Turn `"Amenities: Pool, WiFi, Gym"` into `"Pool | WiFi | Gym"`.
///
/// Everything after the first colon is split on commas; each entry is
/// trimmed. Returns `None` when there is no colon.
///
/// # Examples
/// ```
/// use hotels_core::parser::parse_amenities;
///
/// assert_eq!(parse_amenities("Amenities: Pool, WiFi"), Some("Pool | WiFi".to_string()));
/// assert_eq!(parse_amenities("Free breakfast"), None);
/// ```
pub fn parse_amenities(text: &str) -> Option<String> {
    let (_, list) = text.split_once(':')?;
    Some(join_fragments(list.split(',').map(str::trim), AMENITY_SEPARATOR))
}
