//! Account number format rule.

/// Required number of digits.
pub const ACCOUNT_NUMBER_LEN: usize = 10;

pub const REASON: &str = "must be exactly 10 digits";

/// An account number is exactly ten ASCII digits, nothing else.
pub fn is_valid_account_number(value: &str) -> bool {
    value.len() == ACCOUNT_NUMBER_LEN && value.bytes().all(|b| b.is_ascii_digit())
}
