//! SIMD-accelerated correlation using the `wide` crate.
//!
//! The window dot product of each kernel row is vectorized four taps at a
//! time with `f64x4`; the tail falls back to scalar accumulation. Rows are
//! still processed sequentially.

use crate::correlate::padded::PaddedImage;
use crate::correlate::scalar::correlate_row;
use crate::correlate::CorrelationBackend;
use crate::kernel::Kernel;
use wide::f64x4;

const LANES: usize = 4;

/// Load 4 f64 values into f64x4.
#[inline]
fn load_f64x4(slice: &[f64]) -> f64x4 {
    f64x4::from([slice[0], slice[1], slice[2], slice[3]])
}

/// Horizontal sum of f64x4.
#[inline]
fn hsum(v: f64x4) -> f64 {
    let arr = v.to_array();
    arr[0] + arr[1] + arr[2] + arr[3]
}

/// Vectorized dot product of two equally long slices.
#[inline]
pub(crate) fn dot_f64x4(weights: &[f64], samples: &[f64]) -> f64 {
    let len = weights.len().min(samples.len());
    let simd_end = len / LANES * LANES;

    let mut acc = f64x4::ZERO;
    let mut i = 0;
    while i < simd_end {
        acc = acc + load_f64x4(&weights[i..]) * load_f64x4(&samples[i..]);
        i += LANES;
    }

    let mut tail = 0.0f64;
    for j in simd_end..len {
        tail += weights[j] * samples[j];
    }
    hsum(acc) + tail
}

/// Sequential rows with vectorized window dot products.
pub(crate) struct SimdRows;

impl CorrelationBackend for SimdRows {
    fn correlate(padded: &PaddedImage, kernel: &Kernel) -> Vec<f32> {
        let row_len = padded.width() * padded.channels();
        let mut out = vec![0.0f32; row_len * padded.height()];
        for (y, out_row) in out.chunks_exact_mut(row_len).enumerate() {
            correlate_row(padded, kernel, y, out_row, dot_f64x4);
        }
        out
    }
}
