// src/output.rs

use std::path::Path;

use csv::Writer;
use tracing::{debug, instrument};

use crate::error::{Result, ScrapeError};
use crate::record::GiEntry;

fn write_all(path: &Path, headers: &[String], entries: &[GiEntry]) -> csv::Result<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(headers)?;

    for entry in entries {
        // Labels outside the schema have no value; keep the column, leave it blank.
        wtr.write_record(headers.iter().map(|h| entry.get(h).unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `entries` to `path` (truncating it) under the scraped `headers`,
/// in their scraped order. Returns the number of data lines written.
#[instrument(level = "debug", skip(headers, entries), fields(path = %path.display()))]
pub fn write_csv(path: &Path, headers: &[String], entries: &[GiEntry]) -> Result<usize> {
    write_all(path, headers, entries).map_err(|e| ScrapeError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(rows = entries.len(), "csv written");
    Ok(entries.len())
}
