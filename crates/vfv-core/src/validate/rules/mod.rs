//! Format rules for extracted field values.

pub mod account;
pub mod date;
pub mod vendor_code;

pub use account::is_valid_account_number;
pub use date::{is_valid_date, parse_date};
pub use vendor_code::is_valid_vendor_code;

use crate::models::fields::Field;

/// A format constraint on one field.
#[derive(Debug, Clone, Copy)]
pub struct FormatRule {
    pub field: Field,
    pub reason: &'static str,
    pub check: fn(&str) -> bool,
}

impl FormatRule {
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

/// Format rules in the order they are evaluated.
pub const FORMAT_RULES: [FormatRule; 3] = [
    FormatRule {
        field: Field::AccountNumber,
        reason: account::REASON,
        check: is_valid_account_number,
    },
    FormatRule {
        field: Field::VendorCode,
        reason: vendor_code::REASON,
        check: is_valid_vendor_code,
    },
    FormatRule {
        field: Field::Date,
        reason: date::REASON,
        check: is_valid_date,
    },
];
