//! Hybrid image composition.
//!
//! A hybrid image mixes one band-filtered image with another:
//!
//! ```text
//! out = quantize(((1 - r) * band1(img1) + r * band2(img2)) * scale)
//! ```
//!
//! where both inputs are first normalized to `[0, 1]` and `quantize`
//! multiplies by 255, clips to `[0, 255]` and truncates to `u8`. Inputs are
//! read through views and every intermediate is a private buffer, so caller
//! images are never modified.

use crate::correlate::FilterOptions;
use crate::filter::BandSpec;
use crate::image::{Image, ImageView, Sample};
use crate::trace::{trace_event, trace_span};
use crate::util::math::{quantize_unit_to_u8, require_positive, require_unit};
use crate::util::{HybridError, HybridResult};

/// Parameters for one hybrid composition. There are no defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HybridConfig {
    /// Filter applied to the first image.
    pub first: BandSpec,
    /// Filter applied to the second image.
    pub second: BandSpec,
    /// Weight of the second image in `[0, 1]`; the first gets `1 - mixin_ratio`.
    pub mixin_ratio: f64,
    /// Gain applied to the mixed result, strictly positive.
    pub scale_factor: f64,
}

impl HybridConfig {
    /// Checks every parameter and reports the first invalid one.
    pub fn validate(&self) -> HybridResult<()> {
        self.first.validate()?;
        self.second.validate()?;
        require_unit("mixin_ratio", self.mixin_ratio)?;
        require_positive("scale_factor", self.scale_factor)?;
        Ok(())
    }
}

/// Validated hybrid pipeline with a chosen execution strategy.
#[derive(Clone, Debug)]
pub struct HybridComposer {
    config: HybridConfig,
    options: FilterOptions,
}

impl HybridComposer {
    /// Creates a composer after validating `config`.
    pub fn new(config: HybridConfig) -> HybridResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            options: FilterOptions::default(),
        })
    }

    /// Sets the correlation strategy used by both band filters.
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    /// Composes the hybrid of `first` and `second`.
    ///
    /// Both images must have identical width, height and channel count.
    pub fn compose<T: Sample>(
        &self,
        first: ImageView<'_, T>,
        second: ImageView<'_, T>,
    ) -> HybridResult<Image<u8>> {
        if first.shape() != second.shape() {
            return Err(HybridError::ShapeMismatch {
                left: first.shape(),
                right: second.shape(),
            });
        }
        let (width, height, channels) = first.shape();
        let _span = trace_span!(
            INFO,
            "create_hybrid_image",
            width = width,
            height = height,
            channels = channels
        )
        .entered();

        let first = normalize(first)?;
        let second = normalize(second)?;
        let first = self.config.first.apply(first.view(), self.options)?;
        let second = self.config.second.apply(second.view(), self.options)?;

        let ratio = self.config.mixin_ratio;
        let scale = self.config.scale_factor;
        let mixed: Vec<u8> = first
            .data()
            .iter()
            .zip(second.data())
            .map(|(&a, &b)| {
                let value = (f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio) * scale;
                quantize_unit_to_u8(value as f32)
            })
            .collect();
        trace_event!(
            INFO,
            "hybrid_mixed",
            mixin_ratio = ratio,
            scale_factor = scale
        );

        Ok(Image::from_parts(mixed, width, height, channels))
    }
}

/// Creates a hybrid image from two images and per-image band keywords.
///
/// `band1` and `band2` accept `"low"` or `"high"` in any case.
#[allow(clippy::too_many_arguments)]
pub fn create_hybrid_image<T: Sample>(
    img1: ImageView<'_, T>,
    img2: ImageView<'_, T>,
    sigma1: f64,
    size1: usize,
    band1: &str,
    sigma2: f64,
    size2: usize,
    band2: &str,
    mixin_ratio: f64,
    scale_factor: f64,
) -> HybridResult<Image<u8>> {
    let config = HybridConfig {
        first: BandSpec::parse(sigma1, size1, band1)?,
        second: BandSpec::parse(sigma2, size2, band2)?,
        mixin_ratio,
        scale_factor,
    };
    HybridComposer::new(config)?.compose(img1, img2)
}

/// Copies `image` into a contiguous `[0, 1]` float image.
fn normalize<T: Sample>(image: ImageView<'_, T>) -> HybridResult<Image<f32>> {
    let (width, height, channels) = image.shape();
    let mut data = Vec::with_capacity(width * height * channels);
    for row in image.rows() {
        for &sample in row {
            data.push(sample.to_unit()?);
        }
    }
    Ok(Image::from_parts(data, width, height, channels))
}
