//! Labeled-field patterns for text extraction.
//!
//! Labels are matched literally and case-sensitively. Whitespace after a label
//! may include line breaks, since extracted PDF text often puts the value on
//! the next line. Name and Branch run to the end of the line their value
//! starts on; the other values have a fixed shape.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref NAME: Regex = Regex::new(
        r"Name:\s*(.+)"
    ).unwrap();

    pub static ref BRANCH: Regex = Regex::new(
        r"Branch:\s*(.+)"
    ).unwrap();

    pub static ref VENDOR_CODE: Regex = Regex::new(
        r"Vendor Code:\s*([A-Za-z0-9]{6})"
    ).unwrap();

    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"Account Number:\s*([0-9]{10})"
    ).unwrap();

    pub static ref DATE: Regex = Regex::new(
        r"Date:\s*([0-9]{4}-[0-9]{2}-[0-9]{2})"
    ).unwrap();
}
