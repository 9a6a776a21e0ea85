//! Vendor code format rule.

pub const VENDOR_CODE_LEN: usize = 6;

pub const REASON: &str = "must be exactly 6 alphanumeric characters";

/// A vendor code is exactly six ASCII letters or digits.
pub fn is_valid_vendor_code(value: &str) -> bool {
    value.len() == VENDOR_CODE_LEN && value.bytes().all(|b| b.is_ascii_alphanumeric())
}
