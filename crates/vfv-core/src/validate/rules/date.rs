//! Date format rule.

use chrono::NaiveDate;

pub const REASON: &str = "must be YYYY-MM-DD and a valid date";

/// Parse a strict `YYYY-MM-DD` date.
///
/// The shape is checked first (zero-padded, dash separated), then the value
/// must be a real calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}
