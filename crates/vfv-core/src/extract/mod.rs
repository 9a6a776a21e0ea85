//! Field extraction.
//!
//! Extraction is permissive: it never fails on malformed content. A field
//! that cannot be found is [`FieldValue::Absent`](crate::models::fields::FieldValue::Absent)
//! and judging values is left to the validator.

pub mod patterns;
mod tabular;
mod text;

pub use tabular::extract_from_record;
pub use text::{extract_from_text, LabeledFieldExtractor, Normalize, TextExtractor};

use crate::document::DocumentContent;
use crate::models::fields::{Field, FieldSet};

/// Trait for single-field extractors.
pub trait FieldExtractor {
    /// The field this extractor produces.
    fn field(&self) -> Field;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<ExtractionMatch>;
}

/// A located, normalized field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch {
    /// Normalized value.
    pub value: String,
    /// Byte range of the match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl ExtractionMatch {
    pub fn new(value: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Extract fields from whatever a document reader produced.
pub fn extract(content: &DocumentContent) -> FieldSet {
    match content {
        DocumentContent::Text(text) => extract_from_text(text),
        DocumentContent::Record(record) => extract_from_record(record),
    }
}

/// Title-case text: the first letter of every run of letters is upper case,
/// the rest lower case.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
