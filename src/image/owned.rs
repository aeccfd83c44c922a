//! Owned contiguous image buffers.

use crate::image::{contiguous_len, ImageView};
use crate::util::{HybridError, HybridResult};

/// Owned image with interleaved channels and no row padding.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
    channels: usize,
}

impl<T> Image<T> {
    /// Wraps a contiguous buffer of exactly `width * height * channels` samples.
    pub fn new(data: Vec<T>, width: usize, height: usize, channels: usize) -> HybridResult<Self> {
        let needed = contiguous_len(width, height, channels)?;
        if data.len() < needed {
            return Err(HybridError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(HybridError::invalid(
                "data",
                format!(
                    "{width}x{height}x{channels} image takes {needed} samples, got {}",
                    data.len()
                ),
            ));
        }
        Ok(Self::from_parts(data, width, height, channels))
    }

    /// Builds an image by evaluating `f(x, y, c)` for every sample.
    pub fn from_fn<F>(width: usize, height: usize, channels: usize, mut f: F) -> HybridResult<Self>
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let len = contiguous_len(width, height, channels)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push(f(x, y, c));
                }
            }
        }
        Ok(Self::from_parts(data, width, height, channels))
    }

    /// Internal constructor for buffers whose length is already known to match.
    pub(crate) fn from_parts(data: Vec<T>, width: usize, height: usize, channels: usize) -> Self {
        debug_assert_eq!(data.len(), width * height * channels);
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of interleaved channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `(width, height, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    /// Returns the samples in row-major, channel-interleaved order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the image and returns its sample buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the sample at `(x, y)` in channel `c` if it is within bounds.
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<&T> {
        if x >= self.width || y >= self.height || c >= self.channels {
            return None;
        }
        self.data
            .get((y * self.width + x) * self.channels + c)
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.width * self.channels,
        }
    }

    /// Applies `f` to every sample, producing a new image of the same shape.
    pub fn map<U, F>(&self, f: F) -> Image<U>
    where
        T: Copy,
        F: FnMut(T) -> U,
    {
        Image::from_parts(
            self.data.iter().copied().map(f).collect(),
            self.width,
            self.height,
            self.channels,
        )
    }
}
