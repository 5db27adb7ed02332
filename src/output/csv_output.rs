//! Two-section CSV output
//!
//! Layout, one field per record:
//!
//! ```text
//! Headings
//! <heading>...
//! Links
//! <link>...
//! ```
//!
//! A data record that fails to write is logged and skipped; the section
//! markers and the final flush are not optional and abort the save.

use crate::data::ScrapedData;
use crate::{SaveError, SaveResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Marker record that opens the headings section
pub const HEADINGS_MARKER: &str = "Headings";

/// Marker record that opens the links section
pub const LINKS_MARKER: &str = "Links";

/// Writes `data` to a CSV file at `path`, replacing any existing file
///
/// # Arguments
///
/// * `data` - The scraped headings and links
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - All sections were written and flushed
/// * `Err(SaveError)` - The file could not be created, or a marker or the
///   final flush failed
pub fn save_csv(data: &ScrapedData, path: &Path) -> SaveResult<()> {
    tracing::info!("Saving data to CSV file: {}", path.display());

    let file = File::create(path).map_err(|source| SaveError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(data, file)?;

    tracing::info!("Data successfully saved to CSV: {}", path.display());
    Ok(())
}

/// Writes the two CSV sections to any writer and flushes it
///
/// Each record is encoded in full before it reaches `sink`, so a failed
/// write drops exactly that record and never leaves a partial field behind.
pub fn write_csv<W: Write>(data: &ScrapedData, mut sink: W) -> SaveResult<()> {
    write_section(&mut sink, HEADINGS_MARKER, &data.headings, "heading")?;
    write_section(&mut sink, LINKS_MARKER, &data.links, "link")?;

    sink.flush()?;
    Ok(())
}

fn write_section<W: Write>(
    sink: &mut W,
    marker: &str,
    records: &[String],
    kind: &str,
) -> SaveResult<()> {
    if let Err(e) = write_record(sink, marker) {
        tracing::error!("Error writing to CSV file: {}", e);
        return Err(e);
    }

    for record in records {
        if let Err(e) = write_record(sink, record) {
            tracing::warn!("Error writing {} to CSV file: {}", kind, e);
        }
    }

    Ok(())
}

/// Encodes one single-field record, then hands the finished bytes to `sink`
fn write_record<W: Write>(sink: &mut W, field: &str) -> SaveResult<()> {
    let bytes = encode_record(field)?;
    sink.write_all(&bytes)?;
    Ok(())
}

fn encode_record(field: &str) -> SaveResult<Vec<u8>> {
    let mut encoder = csv::Writer::from_writer(Vec::new());
    encoder.write_record([field])?;
    encoder
        .into_inner()
        .map_err(|e| SaveError::Io(e.into_error()))
}
