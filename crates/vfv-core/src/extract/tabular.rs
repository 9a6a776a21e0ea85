//! Field extraction from the first record of a tabular source.

use tracing::debug;

use super::title_case;
use crate::models::fields::{Field, FieldSet, FieldValue};
use crate::tabular::TabularRecord;

/// Extract the five tracked fields from a tabular record.
///
/// Each field is read from the column named by its label. A column whose
/// header matches the label only up to case and surrounding whitespace is
/// used when no exact header exists. Name is title-cased; other values are
/// taken as-is. No format checks happen here.
pub fn extract_from_record(record: &TabularRecord) -> FieldSet {
    let fields = FieldSet::from_fn(|field| {
        let value = FieldValue::from_text(column_for(record, field));
        match (field, value) {
            (Field::Name, FieldValue::Present(name)) => FieldValue::Present(title_case(&name)),
            (_, value) => value,
        }
    });

    debug!(
        "Extracted fields from record with {} cells, missing: {:?}",
        record.len(),
        fields.missing()
    );
    fields
}

fn column_for(record: &TabularRecord, field: Field) -> Option<&str> {
    record.get(field.label()).or_else(|| {
        record
            .iter()
            .find(|(header, _)| Field::from_label(header) == Some(field))
            .map(|(_, value)| value)
    })
}
