//! Pixel sample types accepted by the filters.

use crate::util::{HybridError, HybridResult};

/// Element type of an input image.
///
/// `to_f64` is the raw intensity used by correlation. `to_unit` maps the
/// sample into the normalized `[0, 1]` range used by hybrid composition:
/// `u8` samples are divided by 255, `f32` samples must already be
/// normalized and are rejected otherwise.
pub trait Sample: Copy + Send + Sync + 'static {
    /// Returns the raw sample value.
    fn to_f64(self) -> f64;

    /// Returns the sample normalized to `[0, 1]`.
    fn to_unit(self) -> HybridResult<f32>;
}

impl Sample for u8 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn to_unit(self) -> HybridResult<f32> {
        Ok(f32::from(self) / 255.0)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn to_unit(self) -> HybridResult<f32> {
        if self.is_finite() && (0.0..=1.0).contains(&self) {
            Ok(self)
        } else {
            Err(HybridError::NotNormalized { value: self })
        }
    }
}
