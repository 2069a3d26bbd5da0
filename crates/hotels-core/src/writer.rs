//! Export of hotel records to disk
//!
//! CSV is the default format: a header row taken from the record's field
//! names followed by one row per hotel. An empty result writes nothing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::HotelRecord;

/// File name used when the caller does not pick one
pub const DEFAULT_OUTPUT_FILE: &str = "Hotels.csv";

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array of objects
    Json,
}

/// Save hotel records to `path`, replacing any existing file.
///
/// # Arguments
/// * `hotels` - Records in the order they should appear
/// * `path` - Destination file; its parent directory must exist
/// * `format` - Output format
///
/// # Returns
/// * `Ok(Some(path))` after writing the file
/// * `Ok(None)` if `hotels` is empty; no file is created
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_hotels(
    hotels: &[HotelRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<Option<PathBuf>> {
    if hotels.is_empty() {
        return Ok(None);
    }

    let path = path.as_ref();
    match format {
        OutputFormat::Csv => write_csv(hotels, path)?,
        OutputFormat::Json => write_json(hotels, path)?,
    }

    info!(path = %path.display(), count = hotels.len(), ?format, "saved hotels");
    Ok(Some(path.to_path_buf()))
}

fn write_csv(hotels: &[HotelRecord], path: &Path) -> Result<()> {
    // Header row comes from the first serialized record's field names
    let mut writer = csv::Writer::from_path(path)?;
    for hotel in hotels {
        writer.serialize(hotel)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(hotels: &[HotelRecord], path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, hotels)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
