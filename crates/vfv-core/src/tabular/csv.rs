//! First-record CSV reader.

use tracing::debug;

use super::TabularRecord;
use crate::error::DocumentError;

/// Read the header row and the first data row of a CSV source.
pub fn read_first_record(data: &[u8]) -> Result<TabularRecord, DocumentError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| DocumentError::Csv(e.to_string()))?
        .clone();

    let Some(row) = reader.records().next() else {
        debug!("CSV has {} columns and no data rows", headers.len());
        return Ok(TabularRecord::default());
    };
    let row = row.map_err(|e| DocumentError::Csv(e.to_string()))?;

    debug!("Read first CSV row with {} of {} columns", row.len(), headers.len());
    Ok(TabularRecord::from_pairs(
        headers.iter().enumerate().map(|(i, h)| (h, row.get(i))),
    ))
}
