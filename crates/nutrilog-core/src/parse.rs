//! Tolerant numeric input parsing.
//!
//! The ledger is intentionally permissive with free-text numeric input:
//! instead of rejecting a bad value it substitutes a documented default.
//! This module is the single place that policy lives, so the rest of the
//! core only ever sees well-typed numbers.
//!
//! Defaults: nutrition fields fall back to 0, quantities fall back to 1.

/// Parse a nutrition field from text. Unparsable, negative, or non-finite
/// input becomes 0.
pub fn non_negative(text: &str) -> f64 {
    clamp_non_negative(text.trim().parse().unwrap_or(0.0))
}

/// Parse an entry quantity from text. Unparsable, non-positive, or
/// non-finite input becomes 1.
pub fn quantity(text: &str) -> f64 {
    clamp_quantity(text.trim().parse().unwrap_or(f64::NAN))
}

/// Clamp an already-parsed nutrition value: anything not a finite positive
/// number becomes 0.
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Clamp an already-parsed quantity: anything not a finite positive number
/// becomes 1.
pub fn clamp_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}
