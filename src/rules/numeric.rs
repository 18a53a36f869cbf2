//! How measurements read inside rule predicates.
//!
//! An absent measurement reads as zero in arithmetic and ordering
//! comparisons, but never equals a number in an exact test. Presence rules
//! check for absence explicitly.

#[inline]
pub fn n(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

#[inline]
pub fn absent_or_negative(value: Option<f64>) -> bool {
    value.is_none_or(|v| v.is_nan() || v < 0.0)
}

#[inline]
#[allow(clippy::float_cmp)]
pub fn is_exactly(value: Option<f64>, expected: f64) -> bool {
    value.is_some_and(|v| v == expected)
}
