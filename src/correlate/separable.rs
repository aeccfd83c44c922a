//! Two-pass correlation for separable kernels.
//!
//! A kernel `column * row^T` is applied as a horizontal pass with `row`
//! followed by a vertical pass with `column`. Both passes zero-pad the
//! same way the dense path does (`len / 2` taps before the anchor), so the
//! result equals dense correlation with `to_kernel()` up to rounding.

use crate::correlate::padded::PaddedImage;
use crate::correlate::scalar::dot_scalar;
use crate::image::{Image, ImageView, Sample};
use crate::kernel::SeparableKernel;
use crate::util::HybridResult;

pub(crate) fn correlate_separable<T: Sample>(
    image: ImageView<'_, T>,
    kernel: &SeparableKernel,
) -> HybridResult<Image<f32>> {
    let (width, height, channels) = image.shape();
    let row_taps = kernel.row();
    let column_taps = kernel.column();

    // Horizontal pass: pad columns only.
    let padded = PaddedImage::new(image, 1, row_taps.len())?;
    let mut horizontal = vec![vec![0.0f64; width * height]; channels];
    for (c, plane) in horizontal.iter_mut().enumerate() {
        for y in 0..height {
            for x in 0..width {
                plane[y * width + x] =
                    dot_scalar(row_taps, padded.window_row(c, y, x, row_taps.len()));
            }
        }
    }

    // Vertical pass: walk each column through a zero-padded line buffer.
    let pad_top = column_taps.len() / 2;
    let mut line = vec![0.0f64; height + column_taps.len() - 1];
    let mut out = vec![0.0f32; width * height * channels];
    for (c, plane) in horizontal.iter().enumerate() {
        for x in 0..width {
            for y in 0..height {
                line[pad_top + y] = plane[y * width + x];
            }
            for y in 0..height {
                let acc = dot_scalar(column_taps, &line[y..y + column_taps.len()]);
                out[(y * width + x) * channels + c] = acc as f32;
            }
        }
    }

    Ok(Image::from_parts(out, width, height, channels))
}
