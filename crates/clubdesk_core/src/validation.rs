//! Stateless field predicates shared by entity self-validation.
//!
//! # Invariants
//! - Predicates are pure and never panic.
//! - `parse_date` returns `None` exactly when `is_valid_date` is false.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical on-disk and input date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Returns `false` for empty or whitespace-only text.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Optional-text variant of [`is_not_empty`]; `None` counts as empty.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(is_not_empty)
}

/// Checks the conventional `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    is_not_empty(value) && EMAIL_RE.is_match(value)
}

/// Checks for exactly ten ASCII decimal digits.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Checks for a finite decimal number.
pub fn is_numeric(value: &str) -> bool {
    is_not_empty(value)
        && value
            .trim()
            .parse::<f64>()
            .is_ok_and(|number| number.is_finite())
}

/// Strict `YYYY-MM-DD`; out-of-range calendar values (`2024-02-30`) fail.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// Never raises: returns `None` whenever [`is_valid_date`] would be false.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Renders a date in the canonical layout.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
