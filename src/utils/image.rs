//! Conversions between grayscale intensity arrays and `image` buffers.
//!
//! The pipelines work on `ndarray::Array2<f32>` in unit intensity scale
//! (`[0, 1]`), while the resizing and warping primitives come from the
//! `image` and `imageproc` crates and operate on pixel buffers. This module
//! provides the loading and conversion functions that bridge the two.

use crate::core::{TransformError, TransformResult};
use image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;

use crate::core::constants::MAX_8BIT_INTENSITY;

/// A single-channel float pixel buffer, the interchange type for the
/// `image`/`imageproc` primitives.
pub type GrayBufferF32 = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Loads an image from a file path as a unit-scale grayscale array.
///
/// Any format supported by the `image` crate is accepted; color images are
/// converted to 8-bit luma before scaling into `[0, 1]`.
///
/// # Errors
///
/// Returns [`TransformError::ImageLoad`] if the image cannot be decoded.
pub fn load_grayscale(path: &std::path::Path) -> TransformResult<Array2<f32>> {
    let img = image::open(path)?;
    Ok(gray_to_array(&img.to_luma8()))
}

/// Converts an 8-bit grayscale image into a unit-scale intensity array.
pub fn gray_to_array(img: &GrayImage) -> Array2<f32> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[0] as f32 / MAX_8BIT_INTENSITY
    })
}

/// Converts a unit-scale intensity array back into an 8-bit grayscale image,
/// clamping out-of-range values. Useful for dumping augmented samples.
pub fn array_to_gray(img: &Array2<f32>) -> GrayImage {
    let (h, w) = img.dim();
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        let v = img[(y as usize, x as usize)] * MAX_8BIT_INTENSITY;
        Luma([v.clamp(0.0, MAX_8BIT_INTENSITY).round() as u8])
    })
}

/// Reinterprets an intensity array as a float pixel buffer without copying
/// the pixel data.
pub fn array_to_buffer(img: Array2<f32>) -> TransformResult<GrayBufferF32> {
    let (h, w) = img.dim();
    let (data, _) = img.into_raw_vec_and_offset();
    ImageBuffer::from_raw(w as u32, h as u32, data).ok_or_else(|| {
        TransformError::invalid_input(format!(
            "pixel data does not match dimensions ({h}, {w})"
        ))
    })
}

/// Reinterprets a float pixel buffer as an intensity array without copying
/// the pixel data.
pub fn buffer_to_array(buf: GrayBufferF32) -> TransformResult<Array2<f32>> {
    let (w, h) = buf.dimensions();
    Ok(Array2::from_shape_vec(
        (h as usize, w as usize),
        buf.into_raw(),
    )?)
}
