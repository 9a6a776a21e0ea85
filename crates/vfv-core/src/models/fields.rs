//! The five tracked fields and the value sets built around them.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Number of tracked fields.
pub const FIELD_COUNT: usize = 5;

/// A tracked document field.
///
/// Variant order is the fixed order used for extraction, validation and
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Name")]
    Name,
    #[serde(rename = "Branch")]
    Branch,
    #[serde(rename = "Vendor Code")]
    VendorCode,
    #[serde(rename = "Account Number")]
    AccountNumber,
    #[serde(rename = "Date")]
    Date,
}

impl Field {
    /// All fields in reporting order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Branch,
        Field::VendorCode,
        Field::AccountNumber,
        Field::Date,
    ];

    /// Human-readable label, also the column header of tabular sources.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Branch => "Branch",
            Field::VendorCode => "Vendor Code",
            Field::AccountNumber => "Account Number",
            Field::Date => "Date",
        }
    }

    /// Look up a field by its label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Field> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value of a single field: either found in the document or absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// The field was found; the value is already normalized.
    Present(String),
    /// The field could not be found or extracted.
    #[default]
    Absent,
}

impl FieldValue {
    /// Rendering of an absent value.
    pub const BLANK: &'static str = "Blank";

    /// Build a value from optional text. Empty or whitespace-only text is absent.
    pub fn from_text(text: Option<&str>) -> Self {
        match text.map(str::trim) {
            Some(t) if !t.is_empty() => FieldValue::Present(t.to_string()),
            _ => FieldValue::Absent,
        }
    }

    /// The present value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldValue::Present(v) => Some(v),
            FieldValue::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Display form, with absent values rendered as `Blank`.
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or(Self::BLANK)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized field values extracted from one document.
///
/// Every field always has an entry; missing data is [`FieldValue::Absent`].
/// A `FieldSet` is built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet {
    values: [FieldValue; FIELD_COUNT],
}

impl FieldSet {
    /// A set with every field absent.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a set by computing each field's value.
    pub fn from_fn(mut f: impl FnMut(Field) -> FieldValue) -> Self {
        Self {
            values: Field::ALL.map(&mut f),
        }
    }

    pub fn get(&self, field: Field) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Iterate over all fields in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        Field::ALL.into_iter().zip(self.values.iter())
    }

    /// Fields whose value is absent, in reporting order.
    pub fn missing(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, v)| v.is_absent())
            .map(|(f, _)| f)
            .collect()
    }

    /// True when no field is absent.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.is_absent())
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}

/// Expected field values supplied by the submitter.
///
/// Values are trimmed on construction. An empty value means the submitter
/// left the input empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDeclaration {
    values: [String; FIELD_COUNT],
}

impl UserDeclaration {
    pub fn new(
        name: impl Into<String>,
        branch: impl Into<String>,
        vendor_code: impl Into<String>,
        account_number: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let raw = [
            name.into(),
            branch.into(),
            vendor_code.into(),
            account_number.into(),
            date.into(),
        ];
        Self {
            values: raw.map(|v| v.trim().to_string()),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Serialize for UserDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}
