//! Image views and owned image buffers.
//!
//! `ImageView` is a borrowed view into a 1D buffer holding rows of
//! channel-interleaved samples. The stride counts elements between the
//! starts of consecutive rows, so a stride larger than `width * channels`
//! represents padded rows. A single channel is a grayscale (rank 2) image;
//! more channels make a color (rank 3) image.

use crate::util::{HybridError, HybridResult};

#[cfg(feature = "image-io")]
pub mod io;
mod owned;
mod sample;

pub use owned::Image;
pub use sample::Sample;

/// Borrowed interleaved image view with an explicit row stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width * channels`.
    pub fn from_slice(
        data: &'a [T],
        width: usize,
        height: usize,
        channels: usize,
    ) -> HybridResult<Self> {
        let row_len = row_len(width, height, channels)?;
        Self::new(data, width, height, channels, row_len)
    }

    /// Creates a view with an explicit stride in elements.
    pub fn new(
        data: &'a [T],
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
    ) -> HybridResult<Self> {
        let needed = required_len(width, height, channels, stride)?;
        if data.len() < needed {
            return Err(HybridError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
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

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `(width, height, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the sample at `(x, y)` in channel `c` if it is within bounds.
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height || c >= self.channels {
            return None;
        }
        let idx = y
            .checked_mul(self.stride)?
            .checked_add(x * self.channels + c)?;
        self.data.get(idx)
    }

    /// Returns row `y` as a slice of `width * channels` interleaved samples.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width * self.channels)?;
        self.data.get(start..end)
    }

    /// Iterates over all rows, skipping stride padding.
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> {
        let data = self.data;
        let stride = self.stride;
        let row_len = self.width * self.channels;
        (0..self.height).map(move |y| &data[y * stride..y * stride + row_len])
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Copies the view into a contiguous owned image.
    pub fn to_image(&self) -> Image<T> {
        let mut data = Vec::with_capacity(self.width * self.height * self.channels);
        for row in self.rows() {
            data.extend_from_slice(row);
        }
        Image::from_parts(data, self.width, self.height, self.channels)
    }
}

fn row_len(width: usize, height: usize, channels: usize) -> HybridResult<usize> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(HybridError::InvalidDimensions {
            width,
            height,
            channels,
        });
    }
    width
        .checked_mul(channels)
        .ok_or(HybridError::InvalidDimensions {
            width,
            height,
            channels,
        })
}

fn required_len(
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
) -> HybridResult<usize> {
    let row_len = row_len(width, height, channels)?;
    if stride < row_len {
        return Err(HybridError::InvalidStride { row_len, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_len))
        .ok_or(HybridError::InvalidDimensions {
            width,
            height,
            channels,
        })
}

/// Returns the exact sample count of a contiguous image.
pub(crate) fn contiguous_len(width: usize, height: usize, channels: usize) -> HybridResult<usize> {
    required_len(width, height, channels, row_len(width, height, channels)?)
}

#[cfg(test)]
mod tests {
    use super::ImageView;

    #[test]
    fn strided_rows_skip_padding() {
        // 2x2 RGB with one padding sample per row.
        let data: Vec<u8> = (0u8..14).collect();
        let view = ImageView::new(&data, 2, 2, 3, 7).unwrap();
        assert_eq!(view.row(0).unwrap(), &[0u8, 1, 2, 3, 4, 5]);
        assert_eq!(view.row(1).unwrap(), &[7u8, 8, 9, 10, 11, 12]);
        assert_eq!(view.get(1, 1, 2).copied(), Some(12));
        assert!(view.get(2, 0, 0).is_none());
        assert!(view.get(0, 0, 3).is_none());

        let owned = view.to_image();
        assert_eq!(owned.data(), &[0u8, 1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12]);
    }
}
