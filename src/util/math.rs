//! Numeric helpers shared by the kernel generator and the composer.

use crate::util::{HybridError, HybridResult};

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> HybridResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HybridError::invalid(
            name,
            format!("must be finite and positive, got {value}"),
        ));
    }
    Ok(value)
}

/// Checks that `value` lies in the closed unit interval.
pub(crate) fn require_unit(name: &'static str, value: f64) -> HybridResult<f64> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(HybridError::invalid(
            name,
            format!("must lie in [0, 1], got {value}"),
        ));
    }
    Ok(value)
}

/// Checks that a kernel extent is non-zero.
pub(crate) fn require_extent(name: &'static str, value: usize) -> HybridResult<usize> {
    if value == 0 {
        return Err(HybridError::invalid(name, "must be at least 1"));
    }
    Ok(value)
}

/// Maps a normalized intensity to 8 bits: scale by 255, clip, truncate.
#[inline]
pub(crate) fn quantize_unit_to_u8(value: f32) -> u8 {
    let scaled = value * 255.0;
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}
