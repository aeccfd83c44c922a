//! Circular Gaussian kernel generation.
//!
//! Weights follow `exp(-((i - cy)^2 + (j - cx)^2) / (2 sigma^2))` with
//! `cy = height / 2` and `cx = width / 2` (integer division), normalized so
//! the weights sum to one. The `1 / (2 pi sigma^2)` prefactor cancels in the
//! normalization and is not evaluated, which keeps very small sigmas from
//! overflowing. Huge sigmas whose `2 sigma^2` overflows to infinity yield the
//! uniform limit; tiny ones yield a delta at the center.

use crate::kernel::{Kernel, SeparableKernel};
use crate::util::math::{require_extent, require_positive};
use crate::util::{HybridError, HybridResult};

/// Returns a `height x width` Gaussian blur kernel whose weights sum to 1.
pub fn gaussian_kernel(sigma: f64, height: usize, width: usize) -> HybridResult<Kernel> {
    gaussian_factors(sigma, height, width).map(|sep| sep.to_kernel())
}

/// Returns the 1D factors of `gaussian_kernel(sigma, height, width)`.
///
/// The column factor has `height` taps and the row factor `width` taps;
/// each is normalized independently, so their outer product is normalized.
pub fn gaussian_factors(sigma: f64, height: usize, width: usize) -> HybridResult<SeparableKernel> {
    let two_sigma_sq = two_sigma_squared(sigma)?;
    require_extent("height", height)?;
    require_extent("width", width)?;
    SeparableKernel::new(
        gaussian_taps(two_sigma_sq, height),
        gaussian_taps(two_sigma_sq, width),
    )
}

fn two_sigma_squared(sigma: f64) -> HybridResult<f64> {
    let sigma = require_positive("sigma", sigma)?;
    let two_sigma_sq = 2.0 * sigma * sigma;
    // Only an underflow to zero breaks the center tap (0 / 0).
    if two_sigma_sq <= 0.0 {
        return Err(HybridError::invalid(
            "sigma",
            format!("{sigma:e} underflows when squared"),
        ));
    }
    Ok(two_sigma_sq)
}

/// Normalized Gaussian taps centered at `len / 2`.
fn gaussian_taps(two_sigma_sq: f64, len: usize) -> Vec<f64> {
    let center = (len / 2) as f64;
    let mut taps: Vec<f64> = (0..len)
        .map(|i| {
            let d = i as f64 - center;
            (-(d * d) / two_sigma_sq).exp()
        })
        .collect();
    // The center tap is exp(0) = 1, so the sum is at least one.
    let sum: f64 = taps.iter().sum();
    taps.iter_mut().for_each(|t| *t /= sum);
    taps
}

#[cfg(test)]
mod tests {
    use super::{gaussian_factors, gaussian_kernel};
    use crate::HybridError;
    use std::f64::consts::PI;

    /// Direct evaluation of the textbook formula, prefactor included.
    fn reference(sigma: f64, height: usize, width: usize) -> Vec<f64> {
        let cy = (height / 2) as f64;
        let cx = (width / 2) as f64;
        let mut out = Vec::new();
        for i in 0..height {
            for j in 0..width {
                let r2 = (i as f64 - cy).powi(2) + (j as f64 - cx).powi(2);
                out.push((-r2 / (2.0 * sigma * sigma)).exp() / (2.0 * PI * sigma * sigma));
            }
        }
        let sum: f64 = out.iter().sum();
        out.into_iter().map(|v| v / sum).collect()
    }

    #[test]
    fn matches_textbook_formula() {
        for &(sigma, h, w) in &[(1.0, 3, 3), (2.5, 5, 9), (0.7, 7, 1), (4.0, 4, 6)] {
            let k = gaussian_kernel(sigma, h, w).unwrap();
            assert_eq!((k.height(), k.width()), (h, w));
            for (got, want) in k.data().iter().zip(reference(sigma, h, w)) {
                assert!((got - want).abs() < 1e-12, "{got} vs {want}");
            }
        }
    }

    #[test]
    fn peak_is_at_floor_center() {
        let k = gaussian_kernel(1.0, 4, 4).unwrap();
        let (cy, cx) = k.center();
        let peak = k.at(cy, cx).unwrap();
        assert!(k.data().iter().all(|&w| w <= peak));
        assert_eq!((cy, cx), (2, 2));
    }

    #[test]
    fn rejects_non_positive_sigma_and_empty_extent() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = gaussian_kernel(sigma, 3, 3).err().unwrap();
            assert!(matches!(
                err,
                HybridError::InvalidParameter { name: "sigma", .. }
            ));
        }
        assert!(gaussian_kernel(1.0, 0, 3).is_err());
        assert!(gaussian_factors(1.0, 3, 0).is_err());
    }

    #[test]
    fn tiny_sigma_degenerates_to_a_delta() {
        let k = gaussian_kernel(1e-3, 3, 3).unwrap();
        assert!((k.at(1, 1).unwrap() - 1.0).abs() < 1e-12);
        assert!((k.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn subnormal_two_sigma_squared_is_still_a_delta() {
        let k = gaussian_kernel(1e-160, 3, 3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                let want = if (r, c) == (1, 1) { 1.0 } else { 0.0 };
                assert_eq!(k.at(r, c).unwrap(), want);
            }
        }
    }

    #[test]
    fn huge_sigma_approaches_a_uniform_kernel() {
        for sigma in [1e200, f64::MAX] {
            let k = gaussian_kernel(sigma, 3, 3).unwrap();
            assert!((k.sum() - 1.0).abs() < 1e-12);
            assert!(k.data().iter().all(|&w| (w - 1.0 / 9.0).abs() < 1e-15));
        }
    }

    #[test]
    fn sigma_that_underflows_when_squared_is_rejected() {
        let err = gaussian_kernel(1e-170, 3, 3).err().unwrap();
        assert!(matches!(
            err,
            HybridError::InvalidParameter { name: "sigma", .. }
        ));
    }
}
