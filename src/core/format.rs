//! # Number Formatting
//!
//! Shared by the calculator display, history entries and converter results.

/// Largest magnitude that still round-trips through `i64` exactly enough to
/// print as an integer.
const INTEGRAL_LIMIT: f64 = 9.0e15;

/// Formats a value for display, dropping the fractional part of integral values.
///
/// `5.0` becomes `"5"`, `-0.0` becomes `"0"`, `0.25` stays `"0.25"`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGRAL_LIMIT {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}
