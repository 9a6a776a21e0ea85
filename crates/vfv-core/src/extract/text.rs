//! Field extraction from free text.

use regex::Regex;
use tracing::{debug, trace};

use super::patterns::{ACCOUNT_NUMBER, BRANCH, DATE, NAME, VENDOR_CODE};
use super::{title_case, ExtractionMatch, FieldExtractor};
use crate::models::fields::{Field, FieldSet, FieldValue};

/// How a matched value is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Trim surrounding whitespace.
    Trim,
    /// Trim, then title-case.
    TitleCase,
}

impl Normalize {
    fn apply(self, raw: &str) -> String {
        match self {
            Normalize::Trim => raw.trim().to_string(),
            Normalize::TitleCase => title_case(raw.trim()),
        }
    }
}

/// Extracts one field by searching for its label pattern.
pub struct LabeledFieldExtractor {
    field: Field,
    pattern: &'static Regex,
    normalize: Normalize,
}

impl LabeledFieldExtractor {
    pub fn new(field: Field, pattern: &'static Regex, normalize: Normalize) -> Self {
        Self {
            field,
            pattern,
            normalize,
        }
    }

    /// The built-in extractor for `field`.
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Name => Self::new(field, &NAME, Normalize::TitleCase),
            Field::Branch => Self::new(field, &BRANCH, Normalize::Trim),
            Field::VendorCode => Self::new(field, &VENDOR_CODE, Normalize::Trim),
            Field::AccountNumber => Self::new(field, &ACCOUNT_NUMBER, Normalize::Trim),
            Field::Date => Self::new(field, &DATE, Normalize::Trim),
        }
    }
}

impl FieldExtractor for LabeledFieldExtractor {
    fn field(&self) -> Field {
        self.field
    }

    fn extract(&self, text: &str) -> Option<ExtractionMatch> {
        let caps = self.pattern.captures(text)?;
        let full_match = caps.get(0)?;
        let value = self.normalize.apply(caps.get(1)?.as_str());

        if value.is_empty() {
            trace!("{} label found with empty value", self.field);
            return None;
        }

        Some(
            ExtractionMatch::new(value, full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

/// Extracts all five fields from free text.
pub struct TextExtractor {
    extractors: Vec<LabeledFieldExtractor>,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self {
            extractors: Field::ALL
                .into_iter()
                .map(LabeledFieldExtractor::for_field)
                .collect(),
        }
    }

    /// Build a [`FieldSet`], first match per field; unmatched fields are absent.
    pub fn extract(&self, text: &str) -> FieldSet {
        let fields = FieldSet::from_fn(|field| {
            self.extractors
                .iter()
                .find(|e| e.field() == field)
                .and_then(|e| e.extract(text))
                .map(|m| {
                    trace!("{} matched {:?} at {:?}", field, m.source, m.position);
                    FieldValue::Present(m.value)
                })
                .unwrap_or(FieldValue::Absent)
        });

        debug!(
            "Extracted fields from {} characters of text, missing: {:?}",
            text.len(),
            fields.missing()
        );
        fields
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the five tracked fields from free text.
pub fn extract_from_text(text: &str) -> FieldSet {
    TextExtractor::new().extract(text)
}
