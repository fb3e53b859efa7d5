//! Numeric utilities: centralized conversions between sizes, counts and floats.
//!
//! Guidelines
//! - Input sizes and counts are converted to `f64` through these helpers so the
//!   (documented) precision loss above 2^53 stays searchable.
//! - Prefer fallible conversions when an out-of-range value should stop the operation.

#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64(v: u64) -> f64 {
    v as f64
}

#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64(v: usize) -> f64 {
    v as f64
}

#[inline]
#[must_use]
pub fn u64_to_usize(v: u64) -> Option<usize> {
    usize::try_from(v).ok()
}

#[inline]
#[must_use]
pub fn usize_to_u32_saturating(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Rows needed to lay out `n` panels in `cols` columns (at least one row).
#[inline]
#[must_use]
pub fn grid_rows(n: usize, cols: usize) -> usize {
    let cols = cols.max(1);
    n.div_ceil(cols).max(1)
}
