//! Tabular document readers (CSV and XLSX).
//!
//! Readers return only the first data row of the source as a
//! [`TabularRecord`]. Header names and cell values are trimmed; empty cells
//! are left out of the record. A source with a header but no data row yields
//! an empty record rather than an error.

pub mod csv;
pub mod xlsx;

use std::collections::BTreeMap;

use serde::Serialize;

/// A single row of a tabular source, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TabularRecord {
    cells: BTreeMap<String, String>,
}

impl TabularRecord {
    /// Build a record from header/value pairs.
    ///
    /// Blank headers and blank values are skipped. When a header repeats, the
    /// first non-blank value wins.
    pub fn from_pairs<H, V>(pairs: impl IntoIterator<Item = (H, Option<V>)>) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cells = BTreeMap::new();
        for (header, value) in pairs {
            let header = header.as_ref().trim();
            let Some(value) = value else { continue };
            let value = value.as_ref().trim();
            if header.is_empty() || value.is_empty() {
                continue;
            }
            cells
                .entry(header.to_string())
                .or_insert_with(|| value.to_string());
        }
        Self { cells }
    }

    /// Value under `header`, if the column exists and the cell is non-empty.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    /// Header/value pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
