use hotels_core::HotelScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "New York".to_string());
    let scraper = HotelScraper::new()?;

    println!("🔍 Searching hotels for '{}'...\n", query);

    let result = scraper.search(&query).await?;

    println!("Found {} hotels:", result.len());
    for (i, hotel) in result.hotels.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, hotel.name, hotel.price);
        if !hotel.rating.is_empty() {
            println!("     ⭐ {}", hotel.rating);
        }
        if !hotel.amenities.is_empty() {
            println!("     🛎  {}", hotel.amenities);
        }
    }

    Ok(())
}
