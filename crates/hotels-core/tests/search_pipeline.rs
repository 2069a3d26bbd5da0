//! End-to-end tests against a local mock of the search endpoint.

use hotels_core::client::BROWSER_HEADERS;
use hotels_core::{
    save_hotels, ClientConfig, HotelRecord, HotelScraper, HotelsClient, HotelsError, OutputFormat,
    DEFAULT_OUTPUT_FILE,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWO_HOTELS: &str = include_str!("fixtures/two_hotels.html");
const NO_HOTELS: &str = include_str!("fixtures/no_hotels.html");
const BAD_AMENITIES: &str = include_str!("fixtures/bad_amenities.html");

async fn mock_search(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/travel/search"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> HotelsClient {
    HotelsClient::with_config(ClientConfig {
        endpoint: format!("{}/travel/search", server.uri()),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_sends_query_and_browser_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/travel/search"))
        .and(query_param("q", "San Francisco"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).fetch("  San Francisco ").await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "<html></html>");

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    for &(name, value) in BROWSER_HEADERS {
        let sent = headers
            .get(name)
            .unwrap_or_else(|| panic!("header {} was not sent", name));
        assert_eq!(sent.to_str().unwrap(), value, "header {}", name);
    }
}

#[tokio::test]
async fn test_fetch_returns_non_success_status() {
    let server = mock_search(503, "unavailable").await;

    let response = client_for(&server).fetch("New York").await.unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_ok());
    assert_eq!(response.body, "unavailable");
}

#[tokio::test]
async fn test_fetch_transport_error() {
    // Nothing listens on the discard port
    let client = HotelsClient::with_config(ClientConfig {
        endpoint: "http://127.0.0.1:9/travel/search".to_string(),
    })
    .unwrap();

    assert!(matches!(
        client.fetch("New York").await,
        Err(HotelsError::HttpError(_))
    ));
}

#[tokio::test]
async fn test_two_hotels_written_in_document_order() {
    let server = mock_search(200, TWO_HOTELS).await;
    let scraper = HotelScraper::with_client(client_for(&server));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(DEFAULT_OUTPUT_FILE);

    let result = scraper.search("New York").await.unwrap();
    assert_eq!(result.query, "New York");
    assert_eq!(
        result.hotels,
        [
            HotelRecord::new(
                "The Plaza",
                "$745",
                "4.6 out of 5 stars from 3,102 reviews",
                "Free Wi-Fi | Spa | Fitness centre",
            ),
            HotelRecord::new(
                "Pod 51 Hotel",
                "$129",
                "4.1 out of 5 stars from 5,870 reviews",
                "Free Wi-Fi | Air conditioning",
            ),
        ]
    );

    save_hotels(&result.hotels, &out, OutputFormat::Csv).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "name,price,rating,amenities",
            "The Plaza,$745,\"4.6 out of 5 stars from 3,102 reviews\",Free Wi-Fi | Spa | Fitness centre",
            "Pod 51 Hotel,$129,\"4.1 out of 5 stars from 5,870 reviews\",Free Wi-Fi | Air conditioning",
        ]
    );
}

#[tokio::test]
async fn test_not_found_status_skips_extraction_and_writing() {
    // Body would fail extraction if it were parsed
    let server = mock_search(404, BAD_AMENITIES).await;
    let scraper = HotelScraper::with_client(client_for(&server));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(DEFAULT_OUTPUT_FILE);

    match scraper.search("New York").await {
        Err(HotelsError::UnexpectedStatus(status)) => assert_eq!(status, 404),
        other => panic!("Expected UnexpectedStatus error, got {:?}", other),
    }
    assert!(!out.exists());
}

#[tokio::test]
async fn test_page_without_cards_writes_nothing() {
    let server = mock_search(200, NO_HOTELS).await;
    let scraper = HotelScraper::with_client(client_for(&server));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(DEFAULT_OUTPUT_FILE);

    let result = scraper.search("New York").await.unwrap();
    assert!(result.is_empty());

    let written = save_hotels(&result.hotels, &out, OutputFormat::Csv).unwrap();
    assert!(written.is_none());
    assert!(!out.exists());
}

#[tokio::test]
async fn test_malformed_amenities_fails_the_run() {
    let server = mock_search(200, BAD_AMENITIES).await;
    let scraper = HotelScraper::with_client(client_for(&server));

    match scraper.search("New York").await {
        Err(HotelsError::MalformedAmenities { card, text }) => {
            assert_eq!(card, 0);
            assert_eq!(text, "Free breakfast");
        }
        other => panic!("Expected MalformedAmenities error, got {:?}", other),
    }
}
