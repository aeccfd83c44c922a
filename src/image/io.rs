//! Convenience helpers for loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::Image;
use crate::util::{HybridError, HybridResult};
use image::{ColorType, DynamicImage, ImageFormat};
use std::path::Path;

/// Converts a decoded image into an owned 8-bit image.
///
/// Grayscale sources keep a single channel; everything else becomes RGB.
pub fn image_from_dynamic(img: &DynamicImage) -> HybridResult<Image<u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    match img.color() {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            Image::new(img.to_luma8().into_raw(), width, height, 1)
        }
        _ => Image::new(img.to_rgb8().into_raw(), width, height, 3),
    }
}

/// Loads an image from disk as an 8-bit grayscale or RGB image.
pub fn load_image<P: AsRef<Path>>(path: P) -> HybridResult<Image<u8>> {
    let img = image::open(path).map_err(|err| HybridError::ImageIo {
        reason: err.to_string(),
    })?;
    image_from_dynamic(&img)
}

/// Saves an 8-bit image as PNG.
///
/// One, two, three and four channels map to L8, La8, Rgb8 and Rgba8.
pub fn save_image<P: AsRef<Path>>(path: P, img: &Image<u8>) -> HybridResult<()> {
    let color = match img.channels() {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        other => {
            return Err(HybridError::ImageIo {
                reason: format!("cannot encode {other} channels"),
            })
        }
    };
    image::save_buffer_with_format(
        path,
        img.data(),
        img.width() as u32,
        img.height() as u32,
        color,
        ImageFormat::Png,
    )
    .map_err(|err| HybridError::ImageIo {
        reason: err.to_string(),
    })
}
