//! Low-pass and high-pass frequency-band filters.
//!
//! `low_pass` convolves with a square Gaussian kernel; `high_pass` subtracts
//! that blur from the original, so `low_pass + high_pass` reconstructs the
//! input. High-pass output is signed and is never clamped here.

use crate::correlate::{convolve_separable, convolve_with, FilterOptions};
use crate::image::{Image, ImageView, Sample};
use crate::kernel::{gaussian_factors, gaussian_kernel};
use crate::trace::trace_span;
use crate::util::math::{require_extent, require_positive};
use crate::util::{HybridError, HybridResult};
use std::fmt;
use std::str::FromStr;

/// Frequency band kept by a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Coarse structure (Gaussian blur).
    Low,
    /// Fine detail (original minus blur).
    High,
}

impl FromStr for Band {
    type Err = HybridError;

    /// Parses `"low"` or `"high"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("low") {
            Ok(Band::Low)
        } else if s.eq_ignore_ascii_case("high") {
            Ok(Band::High)
        } else {
            Err(HybridError::invalid(
                "band",
                format!("expected \"low\" or \"high\", got {s:?}"),
            ))
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Low => f.write_str("low"),
            Band::High => f.write_str("high"),
        }
    }
}

/// Band-pass filter applied to one input of a hybrid image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandSpec {
    /// Gaussian standard deviation, strictly positive.
    pub sigma: f64,
    /// Side length of the square Gaussian kernel, at least 1.
    pub size: usize,
    /// Which band to keep.
    pub band: Band,
}

impl BandSpec {
    pub fn new(sigma: f64, size: usize, band: Band) -> Self {
        Self { sigma, size, band }
    }

    /// Builds a spec from a band keyword such as `"Low"` or `"HIGH"`.
    pub fn parse(sigma: f64, size: usize, band: &str) -> HybridResult<Self> {
        let spec = Self::new(sigma, size, band.parse()?);
        spec.validate()?;
        Ok(spec)
    }

    /// Checks sigma and kernel size.
    pub fn validate(&self) -> HybridResult<()> {
        require_positive("sigma", self.sigma)?;
        require_extent("size", self.size)?;
        Ok(())
    }

    /// Filters `image` with this spec.
    pub fn apply<T: Sample>(
        &self,
        image: ImageView<'_, T>,
        options: FilterOptions,
    ) -> HybridResult<Image<f32>> {
        match self.band {
            Band::Low => low_pass_with(image, self.sigma, self.size, options),
            Band::High => high_pass_with(image, self.sigma, self.size, options),
        }
    }
}

/// Blurs `image` with a `size x size` Gaussian of standard deviation `sigma`.
pub fn low_pass<T: Sample>(
    image: ImageView<'_, T>,
    sigma: f64,
    size: usize,
) -> HybridResult<Image<f32>> {
    low_pass_with(image, sigma, size, FilterOptions::default())
}

/// Returns `image - low_pass(image, sigma, size)`.
pub fn high_pass<T: Sample>(
    image: ImageView<'_, T>,
    sigma: f64,
    size: usize,
) -> HybridResult<Image<f32>> {
    high_pass_with(image, sigma, size, FilterOptions::default())
}

/// `low_pass` with an explicit execution strategy.
pub fn low_pass_with<T: Sample>(
    image: ImageView<'_, T>,
    sigma: f64,
    size: usize,
    options: FilterOptions,
) -> HybridResult<Image<f32>> {
    let _span = trace_span!(DEBUG, "low_pass", sigma = sigma, size = size).entered();
    require_extent("size", size)?;
    if options.separable {
        let factors = gaussian_factors(sigma, size, size)?;
        convolve_separable(image, &factors)
    } else {
        let kernel = gaussian_kernel(sigma, size, size)?;
        convolve_with(image, &kernel, options)
    }
}

/// `high_pass` with an explicit execution strategy.
pub fn high_pass_with<T: Sample>(
    image: ImageView<'_, T>,
    sigma: f64,
    size: usize,
    options: FilterOptions,
) -> HybridResult<Image<f32>> {
    let _span = trace_span!(DEBUG, "high_pass", sigma = sigma, size = size).entered();
    let mut detail = low_pass_with(image, sigma, size, options)?;
    let samples = image.rows().flat_map(|row| row.iter());
    for (out, &src) in detail.data_mut().iter_mut().zip(samples) {
        *out = (src.to_f64() - f64::from(*out)) as f32;
    }
    Ok(detail)
}
