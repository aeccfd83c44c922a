//! Rayon-parallel correlation (feature-gated).
//!
//! Output rows are independent, so each worker writes a disjoint row slice
//! of the result and the only synchronization is the final join. The window
//! dot product is a parameter, so the same row split serves the scalar and
//! the `f64x4` reductions.

use crate::correlate::padded::PaddedImage;
use crate::correlate::scalar::{correlate_row, dot_scalar};
use crate::correlate::CorrelationBackend;
use crate::kernel::Kernel;
use rayon::prelude::*;

fn par_rows<D>(padded: &PaddedImage, kernel: &Kernel, dot: D) -> Vec<f32>
where
    D: Fn(&[f64], &[f64]) -> f64 + Sync,
{
    let row_len = padded.width() * padded.channels();
    let mut out = vec![0.0f32; row_len * padded.height()];
    out.par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, out_row)| correlate_row(padded, kernel, y, out_row, &dot));
    out
}

/// Row-parallel sliding-window reduction.
pub(crate) struct ParallelRows;

impl CorrelationBackend for ParallelRows {
    fn correlate(padded: &PaddedImage, kernel: &Kernel) -> Vec<f32> {
        par_rows(padded, kernel, dot_scalar)
    }
}

/// Row-parallel reduction with vectorized window dot products.
#[cfg(feature = "simd")]
pub(crate) struct ParallelSimdRows;

#[cfg(feature = "simd")]
impl CorrelationBackend for ParallelSimdRows {
    fn correlate(padded: &PaddedImage, kernel: &Kernel) -> Vec<f32> {
        par_rows(padded, kernel, crate::correlate::simd::dot_f64x4)
    }
}
