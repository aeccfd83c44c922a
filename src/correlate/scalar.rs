//! Scalar reference correlation.

use crate::correlate::padded::PaddedImage;
use crate::correlate::CorrelationBackend;
use crate::kernel::Kernel;

/// Row-by-row sliding-window reduction with plain `f64` accumulation.
pub(crate) struct ScalarRows;

#[inline]
pub(crate) fn dot_scalar(weights: &[f64], samples: &[f64]) -> f64 {
    weights.iter().zip(samples).map(|(w, s)| w * s).sum()
}

/// Correlates output row `y` into `out` (`width * channels` interleaved samples).
///
/// `dot` reduces one kernel row against one window row of the padded buffer.
#[inline]
pub(crate) fn correlate_row<D>(
    padded: &PaddedImage,
    kernel: &Kernel,
    y: usize,
    out: &mut [f32],
    dot: D,
) where
    D: Fn(&[f64], &[f64]) -> f64,
{
    let channels = padded.channels();
    let kernel_width = kernel.width();
    for x in 0..padded.width() {
        for c in 0..channels {
            let mut acc = 0.0f64;
            for ky in 0..kernel.height() {
                let window = padded.window_row(c, y + ky, x, kernel_width);
                acc += dot(kernel.row(ky), window);
            }
            out[x * channels + c] = acc as f32;
        }
    }
}

impl CorrelationBackend for ScalarRows {
    fn correlate(padded: &PaddedImage, kernel: &Kernel) -> Vec<f32> {
        let row_len = padded.width() * padded.channels();
        let mut out = vec![0.0f32; row_len * padded.height()];
        for (y, out_row) in out.chunks_exact_mut(row_len).enumerate() {
            correlate_row(padded, kernel, y, out_row, dot_scalar);
        }
        out
    }
}
