//! hybridimg is a CPU spatial-domain image filtering library.
//!
//! It provides zero-padded cross-correlation and convolution for grayscale
//! and multi-channel images, a normalized Gaussian kernel generator,
//! low/high-pass filters, and a hybrid image composer that mixes the low
//! frequencies of one image with the high frequencies of another.
//! Parallel and SIMD execution are available behind the `rayon` and `simd`
//! features; image file loading is behind `image-io`.

pub mod correlate;
pub mod filter;
pub mod hybrid;
pub mod image;
pub mod kernel;
mod trace;
pub mod util;

pub use correlate::{
    convolve, convolve_separable, convolve_with, correlate_separable, correlate_with,
    cross_correlation, FilterOptions,
};
pub use filter::{high_pass, high_pass_with, low_pass, low_pass_with, Band, BandSpec};
pub use hybrid::{create_hybrid_image, HybridComposer, HybridConfig};
pub use crate::image::{Image, ImageView, Sample};
pub use kernel::{gaussian_factors, gaussian_kernel, Kernel, SeparableKernel};
pub use util::{HybridError, HybridResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
