//! Common validation utilities
//!
//! Email is the login key of the marketplace, compared case-insensitively,
//! so normalization lives here next to the format check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check if an email address has a plausible format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Normalize an email address for lookup (trim and lowercase)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max
}
