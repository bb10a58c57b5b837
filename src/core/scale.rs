//! Chart-agnostic scaling math.
//!
//! Every engine shares the zero-safe denominator policy: a degenerate domain
//! (empty, all-zero, or min == max) clamps its span to 1 before division, so
//! degenerate input degrades to a flat layout instead of dividing by zero.

/// Maps `value` from `[domain_min, domain_max]` into `[range_min, range_max]`.
#[must_use]
pub fn linear_scale(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> f64 {
    let span = zero_safe(domain_max - domain_min);
    range_min + (value - domain_min) / span * (range_max - range_min)
}

/// Clamps a denominator to at least 1.
#[must_use]
pub fn zero_safe(denominator: f64) -> f64 {
    if denominator <= 0.0 || !denominator.is_finite() {
        1.0
    } else {
        denominator
    }
}

/// `(min, max)` over the values, or `None` when the slice is empty.
#[must_use]
pub fn value_extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for value in iter {
        min = min.min(value);
        max = max.max(value);
    }
    Some((min, max))
}

/// Maximum over the values, clamped to at least 1 for use as a scale domain.
#[must_use]
pub fn scale_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().fold(0.0_f64, f64::max);
    if max <= 0.0 { 1.0 } else { max }
}
