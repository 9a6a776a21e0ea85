//! First-record XLSX reader using calamine.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use tracing::{debug, trace};

use super::TabularRecord;
use crate::error::DocumentError;

/// Read the header row and the first non-empty data row of the first
/// worksheet.
pub fn read_first_record(data: &[u8]) -> Result<TabularRecord, DocumentError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(data))
        .map_err(|e: calamine::XlsxError| DocumentError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DocumentError::Spreadsheet("workbook has no worksheets".to_string()))?
        .map_err(|e| DocumentError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        debug!("First worksheet is empty");
        return Ok(TabularRecord::default());
    };
    let headers: Vec<Option<String>> = header.iter().map(cell_text).collect();

    let Some(row) = rows.find(|row| row.iter().any(|c| !matches!(c, Data::Empty))) else {
        debug!("Worksheet has {} columns and no data rows", headers.len());
        return Ok(TabularRecord::default());
    };

    Ok(TabularRecord::from_pairs(
        headers
            .iter()
            .zip(row.iter())
            .filter_map(|(h, c)| h.as_deref().map(|h| (h, cell_text(c)))),
    ))
}

/// Render a cell the way a user would type it into a form.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        // Account numbers stored as numbers come back as floats
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) if dt.time() == chrono::NaiveTime::MIN => Some(dt.format("%Y-%m-%d").to_string()),
            Some(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Some(dt.as_f64().to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => {
            trace!("Skipping cell with error value {:?}", e);
            None
        }
    }
}
