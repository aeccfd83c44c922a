//! Cross-correlation and convolution with zero padding.
//!
//! Every output sample is the weighted sum of the kernel window anchored at
//! that pixel, with samples outside the image treated as zero. Outputs keep
//! the input width, height and channel count and are always `f32`.
//! Accumulation happens in `f64` regardless of the input sample type.

use crate::image::{Image, ImageView, Sample};
use crate::kernel::{Kernel, SeparableKernel};
use crate::trace::trace_span;
use crate::util::HybridResult;

mod padded;
#[cfg(feature = "rayon")]
mod rayon;
mod scalar;
mod separable;
#[cfg(feature = "simd")]
mod simd;

use padded::PaddedImage;

/// Execution strategy for the correlation engine.
///
/// All strategies compute the same result up to floating-point rounding;
/// the default is the scalar reference path. `parallel` and `simd` combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Split output rows across the rayon pool. Ignored without the `rayon` feature.
    pub parallel: bool,
    /// Vectorize window dot products. Ignored without the `simd` feature.
    pub simd: bool,
    /// Run Gaussian filters as two 1D passes instead of one dense pass.
    pub separable: bool,
}

/// Strategy seam for dense correlation over a zero-padded buffer.
pub(crate) trait CorrelationBackend {
    /// Correlates every pixel and channel, returning interleaved output.
    fn correlate(padded: &PaddedImage, kernel: &Kernel) -> Vec<f32>;
}

/// Computes the 2D cross-correlation of `image` with `kernel`.
pub fn cross_correlation<T: Sample>(
    image: ImageView<'_, T>,
    kernel: &Kernel,
) -> HybridResult<Image<f32>> {
    correlate_with(image, kernel, FilterOptions::default())
}

/// Computes the 2D convolution of `image` with `kernel`.
///
/// Equivalent to cross-correlation with the kernel rotated by 180 degrees.
pub fn convolve<T: Sample>(image: ImageView<'_, T>, kernel: &Kernel) -> HybridResult<Image<f32>> {
    cross_correlation(image, &kernel.flipped())
}

/// Cross-correlation using the strategy selected by `options`.
pub fn correlate_with<T: Sample>(
    image: ImageView<'_, T>,
    kernel: &Kernel,
    options: FilterOptions,
) -> HybridResult<Image<f32>> {
    let (width, height, channels) = image.shape();
    let _span = trace_span!(
        DEBUG,
        "cross_correlation",
        width = width,
        height = height,
        channels = channels,
        kernel_width = kernel.width(),
        kernel_height = kernel.height()
    )
    .entered();

    let padded = PaddedImage::new(image, kernel.height(), kernel.width())?;
    let data = run_backend(&padded, kernel, options);
    Ok(Image::from_parts(data, width, height, channels))
}

/// Convolution using the strategy selected by `options`.
pub fn convolve_with<T: Sample>(
    image: ImageView<'_, T>,
    kernel: &Kernel,
    options: FilterOptions,
) -> HybridResult<Image<f32>> {
    correlate_with(image, &kernel.flipped(), options)
}

/// Cross-correlation with a separable kernel in two 1D passes.
pub fn correlate_separable<T: Sample>(
    image: ImageView<'_, T>,
    kernel: &SeparableKernel,
) -> HybridResult<Image<f32>> {
    let _span = trace_span!(
        DEBUG,
        "correlate_separable",
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        kernel_width = kernel.width(),
        kernel_height = kernel.height()
    )
    .entered();
    separable::correlate_separable(image, kernel)
}

/// Convolution with a separable kernel in two 1D passes.
pub fn convolve_separable<T: Sample>(
    image: ImageView<'_, T>,
    kernel: &SeparableKernel,
) -> HybridResult<Image<f32>> {
    correlate_separable(image, &kernel.flipped())
}

fn run_backend(padded: &PaddedImage, kernel: &Kernel, options: FilterOptions) -> Vec<f32> {
    #[cfg(all(feature = "rayon", feature = "simd"))]
    {
        if options.parallel && options.simd {
            return <rayon::ParallelSimdRows as CorrelationBackend>::correlate(padded, kernel);
        }
    }
    #[cfg(feature = "rayon")]
    {
        if options.parallel {
            return <rayon::ParallelRows as CorrelationBackend>::correlate(padded, kernel);
        }
    }
    #[cfg(feature = "simd")]
    {
        if options.simd {
            return <simd::SimdRows as CorrelationBackend>::correlate(padded, kernel);
        }
    }
    #[cfg(not(any(feature = "rayon", feature = "simd")))]
    let _ = options;
    <scalar::ScalarRows as CorrelationBackend>::correlate(padded, kernel)
}
