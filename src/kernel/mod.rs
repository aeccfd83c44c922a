//! Filter kernels and the Gaussian kernel generator.
//!
//! A `Kernel` stores `height x width` weights in row-major order. Its
//! center is `(height / 2, width / 2)` with integer division, so odd
//! extents have a true center pixel while even extents shift the center
//! toward the bottom-right. Even extents are accepted without error.

use crate::util::math::require_extent;
use crate::util::{HybridError, HybridResult};

mod gaussian;

pub use gaussian::{gaussian_factors, gaussian_kernel};

/// Dense 2D kernel of `f64` weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Creates a kernel from row-major weights.
    pub fn new(data: Vec<f64>, width: usize, height: usize) -> HybridResult<Self> {
        require_extent("kernel width", width)?;
        require_extent("kernel height", height)?;
        let needed = width
            .checked_mul(height)
            .ok_or_else(|| HybridError::invalid("kernel size", "dimensions overflow"))?;
        if data.len() != needed {
            return Err(HybridError::invalid(
                "kernel data",
                format!(
                    "expected {width}x{height} = {needed} weights, got {}",
                    data.len()
                ),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a kernel by evaluating `f(row, col)` for every weight.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> HybridResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self::new(data, width, height)
    }

    /// The 1x1 kernel `[1.0]`, which leaves images unchanged.
    pub fn identity() -> Self {
        Self {
            data: vec![1.0],
            width: 1,
            height: 1,
        }
    }

    /// Returns the kernel width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the kernel height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(row, col)` of the anchor pixel.
    pub fn center(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Returns the weights in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the weights of kernel row `row`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    /// Returns the weight at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Returns the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Returns the kernel rotated by 180 degrees (flipped along both axes).
    ///
    /// Row-major reversal maps `(r, c)` to `(h - 1 - r, w - 1 - c)`.
    pub fn flipped(&self) -> Self {
        Self {
            data: self.data.iter().rev().copied().collect(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Kernel expressed as the outer product `column * row^T`.
#[derive(Clone, Debug, PartialEq)]
pub struct SeparableKernel {
    column: Vec<f64>,
    row: Vec<f64>,
}

impl SeparableKernel {
    /// Creates a separable kernel from its vertical and horizontal factors.
    pub fn new(column: Vec<f64>, row: Vec<f64>) -> HybridResult<Self> {
        require_extent("kernel height", column.len())?;
        require_extent("kernel width", row.len())?;
        Ok(Self { column, row })
    }

    /// Vertical factor, one weight per kernel row.
    pub fn column(&self) -> &[f64] {
        &self.column
    }

    /// Horizontal factor, one weight per kernel column.
    pub fn row(&self) -> &[f64] {
        &self.row
    }

    /// Returns the kernel width.
    pub fn width(&self) -> usize {
        self.row.len()
    }

    /// Returns the kernel height.
    pub fn height(&self) -> usize {
        self.column.len()
    }

    /// Returns the 180 degree rotation (both factors reversed).
    pub fn flipped(&self) -> Self {
        Self {
            column: self.column.iter().rev().copied().collect(),
            row: self.row.iter().rev().copied().collect(),
        }
    }

    /// Expands the factors into a dense kernel.
    pub fn to_kernel(&self) -> Kernel {
        let mut data = Vec::with_capacity(self.column.len() * self.row.len());
        for &cv in &self.column {
            data.extend(self.row.iter().map(|&rv| cv * rv));
        }
        Kernel {
            data,
            width: self.row.len(),
            height: self.column.len(),
        }
    }
}
