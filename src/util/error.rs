//! Error types for hybridimg.

use thiserror::Error;

/// Result alias for hybridimg operations.
pub type HybridResult<T> = std::result::Result<T, HybridError>;

/// Errors that can occur when filtering or composing images.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HybridError {
    /// A numeric or keyword parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// Two images that must share a shape do not.
    #[error("shape mismatch: {left:?} vs {right:?} (width, height, channels)")]
    ShapeMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },
    /// A floating-point sample lies outside the normalized [0, 1] range.
    #[error("float sample {value} is not normalized to [0, 1]")]
    NotNormalized { value: f32 },
    /// Width, height or channel count is zero or overflows.
    #[error("invalid dimensions: {width}x{height}x{channels}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },
    /// Row stride is shorter than one row of samples.
    #[error("invalid stride {stride} for row of {row_len} samples")]
    InvalidStride { row_len: usize, stride: usize },
    /// Backing buffer cannot hold the described image.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Decoding or encoding through the `image` crate failed.
    #[cfg(feature = "image-io")]
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}

impl HybridError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HybridError;

    #[test]
    fn invalid_parameter_message_names_the_parameter() {
        let err = HybridError::invalid("sigma", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter `sigma`: must be positive, got 0"
        );
    }
}
