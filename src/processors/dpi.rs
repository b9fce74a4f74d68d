//! DPI adjustment for scanned handwriting images.

use crate::core::{Transform, TransformError, TransformResult};
use crate::processors::resize::resize_bilinear;
use ndarray::Array2;
use rand::RngCore;

/// Rescales an image by a fixed factor, rounding target dimensions up.
///
/// Scanned handwriting datasets mix source resolutions; rescaling everything
/// by one factor relative to the assumed physical page size approximates a
/// common DPI. With the default base scale of 0.5 an A4 scan lands at
/// roughly 140 DPI.
#[derive(Debug, Clone)]
pub struct DpiAdjust {
    scale: f32,
}

impl DpiAdjust {
    /// Creates a new `DpiAdjust` with the given scale factor.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `scale` is not a positive finite
    /// number.
    pub fn new(scale: f32) -> TransformResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TransformError::config(format!(
                "DPI scale must be a positive finite number, got {scale}"
            )));
        }
        Ok(Self { scale })
    }

    /// The fixed scale factor applied to every image.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rescales the image to `(ceil(h * scale), ceil(w * scale))`.
    pub fn adjust(&self, img: Array2<f32>) -> TransformResult<Array2<f32>> {
        let (h, w) = img.dim();
        let new_h = (h as f32 * self.scale).ceil() as usize;
        let new_w = (w as f32 * self.scale).ceil() as usize;
        resize_bilinear(img, new_h, new_w)
    }
}

impl Transform for DpiAdjust {
    fn name(&self) -> &'static str {
        "dpi_adjust"
    }

    fn apply(&self, img: Array2<f32>, _rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        self.adjust(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_a_square_image() {
        let img = Array2::from_elem((100, 100), 0.5);
        let out = DpiAdjust::new(0.5).unwrap().adjust(img).unwrap();
        assert_eq!(out.dim(), (50, 50));
    }

    #[test]
    fn rounds_target_dimensions_up() {
        let img = Array2::from_elem((3, 5), 0.5);
        // 3 * 0.3 = 0.9 -> 1, 5 * 0.3 = 1.5 -> 2
        let out = DpiAdjust::new(0.3).unwrap().adjust(img).unwrap();
        assert_eq!(out.dim(), (1, 2));
    }

    #[test]
    fn rejects_non_positive_scale() {
        assert!(matches!(
            DpiAdjust::new(0.0),
            Err(TransformError::Config { .. })
        ));
        assert!(matches!(
            DpiAdjust::new(-1.0),
            Err(TransformError::Config { .. })
        ));
    }
}
