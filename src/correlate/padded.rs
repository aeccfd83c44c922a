//! Zero-padded working buffer for sliding-window correlation.

use crate::image::{ImageView, Sample};
use crate::util::{HybridError, HybridResult};

/// Channel-planar copy of an image surrounded by a zero border.
///
/// For a `m x n` kernel the border is `m / 2` rows on top, `n / 2` columns
/// on the left, and whatever remains of `m - 1` / `n - 1` on the other
/// sides. Reading the padded buffer at `(y + ky, x + kx)` therefore equals
/// reading the source at `(y + ky - m / 2, x + kx - n / 2)`, with zero for
/// any position outside the source.
pub(crate) struct PaddedImage {
    planes: Vec<Vec<f64>>,
    width: usize,
    height: usize,
    padded_width: usize,
}

impl PaddedImage {
    pub(crate) fn new<T: Sample>(
        image: ImageView<'_, T>,
        kernel_height: usize,
        kernel_width: usize,
    ) -> HybridResult<Self> {
        let (width, height, channels) = image.shape();
        let overflow = || HybridError::InvalidDimensions {
            width,
            height,
            channels,
        };
        let padded_width = width
            .checked_add(kernel_width - 1)
            .ok_or_else(overflow)?;
        let padded_height = height
            .checked_add(kernel_height - 1)
            .ok_or_else(overflow)?;
        let plane_len = padded_width
            .checked_mul(padded_height)
            .ok_or_else(overflow)?;

        let pad_top = kernel_height / 2;
        let pad_left = kernel_width / 2;
        let mut planes = vec![vec![0.0f64; plane_len]; channels];
        for (y, row) in image.rows().enumerate() {
            let base = (y + pad_top) * padded_width + pad_left;
            for (x, pixel) in row.chunks_exact(channels).enumerate() {
                for (plane, &value) in planes.iter_mut().zip(pixel) {
                    plane[base + x] = value.to_f64();
                }
            }
        }

        Ok(Self {
            planes,
            width,
            height,
            padded_width,
        })
    }

    /// Source image width.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Source image height.
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn channels(&self) -> usize {
        self.planes.len()
    }

    /// Returns `len` padded samples of channel `c` starting at padded `(y, x)`.
    #[inline]
    pub(crate) fn window_row(&self, c: usize, y: usize, x: usize, len: usize) -> &[f64] {
        let start = y * self.padded_width + x;
        &self.planes[c][start..start + len]
    }
}
