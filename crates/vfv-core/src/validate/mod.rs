//! Validation of extracted fields against the submitter's declaration.

pub mod rules;

pub use rules::{FormatRule, FORMAT_RULES};

use tracing::debug;

use crate::models::fields::{Field, FieldSet, FieldValue, UserDeclaration};
use crate::models::verdict::ValidationError;

/// Validate extracted fields against the declared values.
///
/// Errors come out in a fixed order: one pass over the fields in
/// [`Field::ALL`] order (missing or mismatched), then the format rules in
/// [`FORMAT_RULES`] order. The two passes are independent, so a field can be
/// both mismatched and badly formatted.
pub fn validate(user: &UserDeclaration, extracted: &FieldSet) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Field::ALL
        .into_iter()
        .filter_map(|field| compare_field(field, user.get(field), extracted.get(field)))
        .collect();

    errors.extend(format_errors(extracted));

    debug!("Validation produced {} errors", errors.len());
    errors
}

/// Compare one declared value against its extracted counterpart.
///
/// `declared` comes from [`UserDeclaration`], which trims on construction, so
/// the comparison here is exact.
fn compare_field(field: Field, declared: &str, extracted: &FieldValue) -> Option<ValidationError> {
    match extracted {
        FieldValue::Absent => Some(ValidationError::MissingField { field }),
        FieldValue::Present(found) if declared != found => Some(ValidationError::Mismatch {
            field,
            expected: declared.to_string(),
            found: found.clone(),
        }),
        FieldValue::Present(_) => None,
    }
}

/// Run every format rule against the present values.
pub fn format_errors(extracted: &FieldSet) -> Vec<ValidationError> {
    FORMAT_RULES
        .iter()
        .filter_map(|rule| {
            let value = extracted.get(rule.field).value()?;
            (!rule.is_satisfied_by(value)).then_some(ValidationError::Format {
                field: rule.field,
                reason: rule.reason,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_from_text;
    use pretty_assertions::assert_eq;

    fn fields(values: [&str; 5]) -> FieldSet {
        FieldSet::from_fn(|f| match values[f as usize] {
            "Blank" => FieldValue::Absent,
            v => FieldValue::Present(v.to_string()),
        })
    }

    fn declaration(values: [&str; 5]) -> UserDeclaration {
        UserDeclaration::new(values[0], values[1], values[2], values[3], values[4])
    }

    const VALID: [&str; 5] = ["John Smith", "Main", "AB12CD", "1234567890", "2024-01-15"];

    #[test]
    fn test_matching_values_pass() {
        assert!(validate(&declaration(VALID), &fields(VALID)).is_empty());
    }

    #[test]
    fn test_round_trip_from_text() {
        let text = "Name: john smith\nBranch: Main\nVendor Code: AB12CD\n\
                    Account Number: 1234567890\nDate: 2024-01-15\n";
        let extracted = extract_from_text(text);
        assert!(extracted.is_complete());
        assert!(validate(&declaration(VALID), &extracted).is_empty());
    }

    #[test]
    fn test_declared_value_is_trimmed() {
        let user = declaration(["  John Smith ", "Main", "AB12CD", "1234567890", "2024-01-15"]);
        assert!(validate(&user, &fields(VALID)).is_empty());
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let user = declaration(["John Smith", "main", "AB12CD", "1234567890", "2024-01-15"]);
        assert_eq!(
            validate(&user, &fields(VALID)),
            vec![ValidationError::Mismatch {
                field: Field::Branch,
                expected: "main".into(),
                found: "Main".into(),
            }]
        );
    }

    #[test]
    fn test_missing_fields_scenario() {
        let extracted = extract_from_text("Name: john smith\nAccount Number: 1234567890\nDate: 2024-01-15");
        let errors = validate(&declaration(VALID), &extracted);

        assert_eq!(
            errors,
            vec![
                ValidationError::MissingField { field: Field::Branch },
                ValidationError::MissingField { field: Field::VendorCode },
            ]
        );
    }

    #[test]
    fn test_account_number_boundaries() {
        for (value, expected_errors) in [("123456789", 1), ("12345678901", 1), ("1234567890", 0)] {
            let extracted = fields(["John Smith", "Main", "AB12CD", value, "2024-01-15"]);
            let user = declaration(["John Smith", "Main", "AB12CD", value, "2024-01-15"]);

            let format: Vec<_> = validate(&user, &extracted)
                .into_iter()
                .filter(|e| {
                    matches!(e, ValidationError::Format { field: Field::AccountNumber, .. })
                })
                .collect();
            assert_eq!(format.len(), expected_errors, "account number {value}");
        }
    }

    #[test]
    fn test_vendor_code_boundaries() {
        for (value, valid) in [("AB12C", false), ("AB12CDE", false), ("AB_2CD", false), ("AB12CD", true)] {
            let extracted = fields(["John Smith", "Main", value, "1234567890", "2024-01-15"]);
            let user = declaration(["John Smith", "Main", value, "1234567890", "2024-01-15"]);

            let errors = validate(&user, &extracted);
            if valid {
                assert!(errors.is_empty());
            } else {
                assert_eq!(
                    errors,
                    vec![ValidationError::Format {
                        field: Field::VendorCode,
                        reason: "must be exactly 6 alphanumeric characters",
                    }]
                );
            }
        }
    }

    #[test]
    fn test_invalid_calendar_date() {
        let extracted = extract_from_text(
            "Name: john smith\nBranch: Main\nVendor Code: AB12CD\nAccount Number: 1234567890\nDate: 2024-13-40",
        );
        let user = declaration(["John Smith", "Main", "AB12CD", "1234567890", "2024-13-40"]);

        assert_eq!(
            validate(&user, &extracted),
            vec![ValidationError::Format {
                field: Field::Date,
                reason: "must be YYYY-MM-DD and a valid date",
            }]
        );
    }

    #[test]
    fn test_mismatch_and_format_error_on_same_field() {
        let extracted = fields(["John Smith", "Main", "AB12CD", "12345", "2024-01-15"]);
        let errors = validate(&declaration(VALID), &extracted);

        assert_eq!(
            errors,
            vec![
                ValidationError::Mismatch {
                    field: Field::AccountNumber,
                    expected: "1234567890".into(),
                    found: "12345".into(),
                },
                ValidationError::Format {
                    field: Field::AccountNumber,
                    reason: "must be exactly 10 digits",
                },
            ]
        );
    }

    #[test]
    fn test_error_order_is_stable() {
        let extracted = fields(["Jane Doe", "Blank", "bad", "12", "2024-99-99"]);
        let user = declaration(VALID);

        let first = validate(&user, &extracted);
        let second = validate(&user, &extracted);
        assert_eq!(first, second);

        let order: Vec<(Option<Field>, bool)> = first
            .iter()
            .map(|e| (e.field(), matches!(e, ValidationError::Format { .. })))
            .collect();
        assert_eq!(
            order,
            vec![
                (Some(Field::Name), false),
                (Some(Field::Branch), false),
                (Some(Field::VendorCode), false),
                (Some(Field::AccountNumber), false),
                (Some(Field::Date), false),
                (Some(Field::AccountNumber), true),
                (Some(Field::VendorCode), true),
                (Some(Field::Date), true),
            ]
        );
    }

    #[test]
    fn test_absent_fields_skip_format_rules() {
        let errors = format_errors(&FieldSet::blank());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_declaration_against_blank_set() {
        let errors = validate(&UserDeclaration::default(), &FieldSet::blank());
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| matches!(e, ValidationError::MissingField { .. })));
    }
}
