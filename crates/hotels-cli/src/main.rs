//! Google Hotels scraper command line
//!
//! Fetches one results page, extracts the hotels and writes them to a file.
//!
//! ```text
//! google-hotels "New York" -o Hotels.csv
//! RUST_LOG=debug google-hotels Paris --format json -o paris.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use hotels_core::client::DEFAULT_ENDPOINT;
use hotels_core::{
    save_hotels, ClientConfig, HotelScraper, HotelsClient, HotelsError, OutputFormat,
    DEFAULT_OUTPUT_FILE,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "google-hotels", version, about = "Scrape hotel listings from Google Hotels search")]
struct Cli {
    /// Search term, e.g. a city name
    #[arg(env = "HOTELS_QUERY", default_value = "New York")]
    query: String,

    /// Output file (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Search endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT, hide = true)]
    endpoint: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    run(cli).await
}

/// Search, then save. A non-200 answer is reported and yields a failure
/// exit code without touching the output file.
async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let client = HotelsClient::with_config(ClientConfig {
        endpoint: cli.endpoint,
    })?;
    let scraper = HotelScraper::with_client(client);

    let result = match scraper.search(&cli.query).await {
        Ok(result) => result,
        Err(HotelsError::UnexpectedStatus(status)) => {
            eprintln!("Invalid Response (HTTP {})", status);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    match save_hotels(&result.hotels, &cli.output, cli.format.into())? {
        Some(path) => println!("Wrote {} hotels to {}", result.len(), path.display()),
        None => println!("No hotels found for \"{}\"", result.query),
    }

    Ok(ExitCode::SUCCESS)
}
