//! JSON object output
//!
//! Writes `{"headings": [...], "links": [...]}` followed by a newline. Unlike
//! the CSV writer, any failure aborts the whole save.

use crate::data::ScrapedData;
use crate::{SaveError, SaveResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `data` as a JSON object to `path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(())` - The object was encoded and flushed
/// * `Err(SaveError)` - The file could not be created, encoded, or flushed
pub fn save_json(data: &ScrapedData, path: &Path) -> SaveResult<()> {
    tracing::info!("Saving data to JSON file: {}", path.display());

    let file = File::create(path).map_err(|source| SaveError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_json(data, BufWriter::new(file))?;

    tracing::info!("Data successfully saved to JSON: {}", path.display());
    Ok(())
}

/// Encodes `data` into any writer and flushes it
pub fn write_json<W: Write>(data: &ScrapedData, mut sink: W) -> SaveResult<()> {
    serde_json::to_writer(&mut sink, data)?;
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}
