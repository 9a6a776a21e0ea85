//! Validation errors and the verdict that aggregates them.

use std::fmt;

use serde::Serialize;

use super::fields::Field;

/// A single problem found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The extracted value differs from the declared one.
    Mismatch {
        field: Field,
        expected: String,
        found: String,
    },

    /// The field is absent from the document.
    MissingField { field: Field },

    /// The extracted value breaks a format rule.
    Format { field: Field, reason: &'static str },

    /// Summary of every absent field, reported alongside the individual
    /// [`ValidationError::MissingField`] entries.
    MissingSummary { fields: Vec<Field> },
}

impl ValidationError {
    /// The field this error is about, if it concerns exactly one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::Mismatch { field, .. }
            | ValidationError::MissingField { field }
            | ValidationError::Format { field, .. } => Some(*field),
            ValidationError::MissingSummary { .. } => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Mismatch {
                field,
                expected,
                found,
            } => write!(f, "{field} mismatch: Expected '{expected}', Found '{found}'"),
            ValidationError::MissingField { field } => {
                write!(f, "{field} is missing in the uploaded file.")
            }
            ValidationError::Format { field, reason } => write!(f, "{field} {reason}"),
            ValidationError::MissingSummary { fields } => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                write!(f, "Missing values: {}", labels.join(", "))
            }
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// True iff there are no errors and the document was readable.
    pub passed: bool,

    /// Every error, in the order they were found.
    pub errors: Vec<ValidationError>,

    /// Why the document could not be read, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_failure: Option<String>,
}

impl Verdict {
    /// Rendered messages, extraction failure first.
    pub fn messages(&self) -> Vec<String> {
        self.extraction_failure
            .iter()
            .cloned()
            .chain(self.errors.iter().map(ToString::to_string))
            .collect()
    }

    /// Number of reported problems, extraction failure included.
    pub fn error_count(&self) -> usize {
        self.errors.len() + usize::from(self.extraction_failure.is_some())
    }
}
