//! Field validation predicates
//!
//! Pure functions with no knowledge of persistence, so services can call them
//! up front and tests can exercise them in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain, matching the shape residents register with
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap()
});

/// Number of digits a phone number must carry
pub const PHONE_LENGTH: usize = 10;

// Fixed-length local number, digits only
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\d{{{}}}$", PHONE_LENGTH)).unwrap()
});

/// Check if an email address has a valid `local@domain` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a phone number is exactly [`PHONE_LENGTH`] ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Check if a string holds something other than whitespace
pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
