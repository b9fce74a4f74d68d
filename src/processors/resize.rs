//! Bilinear resizing for grayscale intensity arrays.
//!
//! All resizes in the pipelines go through [`resize_bilinear`] so they share
//! one interpolation policy (triangle filter, the `image` crate's bilinear).

use crate::core::{TransformError, TransformResult};
use crate::utils::{array_to_buffer, buffer_to_array};
use image::imageops::{self, FilterType};
use ndarray::Array2;

/// Resizes an intensity array to exactly `(new_h, new_w)` using bilinear
/// interpolation.
///
/// # Errors
///
/// Returns [`TransformError::InvalidInput`] if either target dimension is
/// zero; callers are expected to have validated their scale factors.
pub fn resize_bilinear(
    img: Array2<f32>,
    new_h: usize,
    new_w: usize,
) -> TransformResult<Array2<f32>> {
    if new_h == 0 || new_w == 0 {
        return Err(TransformError::invalid_input(format!(
            "resize target must be positive, got ({new_h}, {new_w})"
        )));
    }
    if img.dim() == (new_h, new_w) {
        return Ok(img);
    }

    let buf = array_to_buffer(img)?;
    let resized = imageops::resize(&buf, new_w as u32, new_h as u32, FilterType::Triangle);
    buffer_to_array(resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_hits_exact_target_dimensions() {
        let img = Array2::from_elem((10, 20), 0.5);
        let out = resize_bilinear(img, 7, 13).unwrap();
        assert_eq!(out.dim(), (7, 13));
    }

    #[test]
    fn resize_of_constant_image_stays_constant() {
        let img = Array2::from_elem((8, 8), 0.25);
        let out = resize_bilinear(img, 16, 16).unwrap();
        for &v in out.iter() {
            assert!((v - 0.25).abs() < 1e-4);
        }
    }

    #[test]
    fn resize_to_same_dimensions_is_identity() {
        let img = Array2::from_shape_fn((4, 5), |(y, x)| (y + x) as f32 / 10.0);
        let out = resize_bilinear(img.clone(), 4, 5).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn resize_rejects_zero_target() {
        let img = Array2::from_elem((4, 4), 1.0);
        assert!(matches!(
            resize_bilinear(img, 0, 4),
            Err(TransformError::InvalidInput { .. })
        ));
    }
}
