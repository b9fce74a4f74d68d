//! Deterministic centered padding up to a minimum frame size.

use crate::core::{Transform, TransformError, TransformResult};
use ndarray::{Array2, ArrayView2, s};
use rand::RngCore;

/// Zero-pads an image so each dimension is at least `(min_h, min_w)`,
/// centering the content. Dimensions already at or above the minimum are
/// left untouched; this never crops.
pub fn pad_to_min_size<T>(img: ArrayView2<'_, T>, min_h: usize, min_w: usize) -> Array2<T>
where
    T: Clone + Default,
{
    let (h, w) = img.dim();
    let out_h = h.max(min_h);
    let out_w = w.max(min_w);
    if (out_h, out_w) == (h, w) {
        return img.to_owned();
    }

    let pad_top = (out_h - h) / 2;
    let pad_left = (out_w - w) / 2;

    let mut canvas = Array2::<T>::from_elem((out_h, out_w), T::default());
    canvas
        .slice_mut(s![pad_top..pad_top + h, pad_left..pad_left + w])
        .assign(&img);
    canvas
}

/// Pipeline stage wrapping [`pad_to_min_size`].
///
/// Used as the deterministic test-time counterpart of random displacement:
/// form pages are centered in the maximum frame instead of being placed at a
/// random offset.
#[derive(Debug, Clone)]
pub struct PadToMinSize {
    min_height: usize,
    min_width: usize,
}

impl PadToMinSize {
    /// Creates a new stage with the given minimum `(height, width)`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either minimum dimension is zero.
    pub fn new(min_height: usize, min_width: usize) -> TransformResult<Self> {
        if min_height == 0 || min_width == 0 {
            return Err(TransformError::config(format!(
                "minimum pad size must have positive dimensions, got ({min_height}, {min_width})"
            )));
        }
        Ok(Self {
            min_height,
            min_width,
        })
    }
}

impl Transform for PadToMinSize {
    fn name(&self) -> &'static str {
        "pad_to_min_size"
    }

    fn apply(&self, img: Array2<f32>, _rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        Ok(pad_to_min_size(img.view(), self.min_height, self.min_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_smaller_image_centered() {
        let img = Array2::from_elem((2, 2), 1.0);
        let out = pad_to_min_size(img.view(), 4, 6);
        assert_eq!(out.dim(), (4, 6));
        assert_eq!(out.slice(s![1..3, 2..4]), img.view());
        let total: f32 = out.iter().sum();
        assert_eq!(total, 4.0);
    }

    #[test]
    fn odd_padding_puts_the_extra_pixel_bottom_right() {
        let img = Array2::from_elem((2, 2), 1.0);
        let out = pad_to_min_size(img.view(), 5, 5);
        // (5 - 2) / 2 = 1 rows/cols on top/left, 2 on bottom/right.
        assert_eq!(out.slice(s![1..3, 1..3]), img.view());
    }

    #[test]
    fn larger_image_is_untouched() {
        let img = Array2::from_shape_fn((6, 8), |(y, x)| (y + x) as f32);
        let out = pad_to_min_size(img.view(), 4, 4);
        assert_eq!(out, img);
    }

    #[test]
    fn pads_each_axis_independently() {
        let img = Array2::from_elem((6, 2), 1.0);
        let out = pad_to_min_size(img.view(), 4, 4);
        assert_eq!(out.dim(), (6, 4));
    }
}
