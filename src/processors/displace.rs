//! Random displacement of an image within a fixed zero-padded frame.

use crate::core::{Transform, TransformError, TransformResult};
use ndarray::{Array2, ArrayView2, s};
use rand::{Rng, RngCore};
use tracing::warn;

/// Places an image at a uniformly random offset inside a zero-filled frame.
///
/// The function is generic over the element type so segmentation masks and
/// other integer-typed arrays keep their dtype; "zero" is the element type's
/// default value.
///
/// If the frame is smaller than the image in either dimension the behavior
/// depends on `crop_if_necessary`: when disabled the call fails with
/// [`TransformError::FrameTooSmall`]; when enabled the image is truncated
/// from the bottom/right (top-left-aligned crop) with a warning, and the
/// offsets are sampled against the cropped dimensions. When a cropped
/// dimension equals the frame the corresponding offset is forced to zero.
///
/// # Errors
///
/// Returns [`TransformError::FrameTooSmall`] when the frame cannot contain
/// the image and cropping is disabled.
pub fn displace_into_frame<T>(
    img: ArrayView2<'_, T>,
    frame: (usize, usize),
    crop_if_necessary: bool,
    rng: &mut dyn RngCore,
) -> TransformResult<Array2<T>>
where
    T: Clone + Default,
{
    let (frame_h, frame_w) = frame;
    let (mut img_h, mut img_w) = img.dim();

    if frame_h < img_h || frame_w < img_w {
        if !crop_if_necessary {
            return Err(TransformError::FrameTooSmall {
                frame_h,
                frame_w,
                img_h,
                img_w,
            });
        }
        warn!(
            frame_h,
            frame_w, img_h, img_w, "cropping input image before padding: it exceeds the frame"
        );
        img_h = img_h.min(frame_h);
        img_w = img_w.min(frame_w);
    }

    let mut canvas = Array2::<T>::from_elem((frame_h, frame_w), T::default());

    let pad_top = rng.gen_range(0..=frame_h - img_h);
    let pad_left = rng.gen_range(0..=frame_w - img_w);

    canvas
        .slice_mut(s![pad_top..pad_top + img_h, pad_left..pad_left + img_w])
        .assign(&img.slice(s![..img_h, ..img_w]));

    Ok(canvas)
}

/// Pipeline stage wrapping [`displace_into_frame`] with a fixed frame.
///
/// Used as the final train-time stage for form pages, after all
/// content-shifting augmentations, so the output frame size is exact.
#[derive(Debug, Clone)]
pub struct RandomDisplaceAndPad {
    frame: (usize, usize),
    crop_if_necessary: bool,
}

impl RandomDisplaceAndPad {
    /// Creates a new stage targeting the given `(height, width)` frame,
    /// with cropping disabled.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either frame dimension is zero.
    pub fn new(frame: (usize, usize)) -> TransformResult<Self> {
        if frame.0 == 0 || frame.1 == 0 {
            return Err(TransformError::config(format!(
                "displacement frame must have positive dimensions, got ({}, {})",
                frame.0, frame.1
            )));
        }
        Ok(Self {
            frame,
            crop_if_necessary: false,
        })
    }

    /// Sets whether oversized images are cropped instead of failing.
    pub fn with_crop(mut self, crop_if_necessary: bool) -> Self {
        self.crop_if_necessary = crop_if_necessary;
        self
    }

    /// The fixed `(height, width)` frame images are placed into.
    pub fn frame(&self) -> (usize, usize) {
        self.frame
    }
}

impl Transform for RandomDisplaceAndPad {
    fn name(&self) -> &'static str {
        "random_displace_and_pad"
    }

    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        displace_into_frame(img.view(), self.frame, self.crop_if_necessary, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn content_image(h: usize, w: usize) -> Array2<f32> {
        // Strictly positive values so content is distinguishable from padding.
        Array2::from_shape_fn((h, w), |(y, x)| (y * w + x + 1) as f32)
    }

    /// Locates the top-left corner of the non-zero block in a padded canvas.
    fn find_offset(canvas: &Array2<f32>) -> (usize, usize) {
        for ((y, x), &v) in canvas.indexed_iter() {
            if v != 0.0 {
                return (y, x);
            }
        }
        panic!("canvas contains no content");
    }

    #[test]
    fn canvas_has_exact_frame_size_and_recoverable_content() {
        let img = content_image(4, 6);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let canvas = displace_into_frame(img.view(), (10, 9), false, &mut rng).unwrap();
            assert_eq!(canvas.dim(), (10, 9));

            let (top, left) = find_offset(&canvas);
            assert!(top <= 6 && left <= 3);
            let block = canvas.slice(s![top..top + 4, left..left + 6]);
            assert_eq!(block, img.view());

            let content_sum: f32 = img.iter().sum();
            let canvas_sum: f32 = canvas.iter().sum();
            assert_eq!(canvas_sum, content_sum);
        }
    }

    #[test]
    fn frame_smaller_without_crop_fails() {
        let img = content_image(10, 10);
        let mut rng = StdRng::seed_from_u64(0);
        let err = displace_into_frame(img.view(), (5, 5), false, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            TransformError::FrameTooSmall {
                frame_h: 5,
                frame_w: 5,
                img_h: 10,
                img_w: 10,
            }
        ));
    }

    #[test]
    fn oversized_image_is_cropped_top_left_with_forced_offsets() {
        let img = content_image(10, 10);
        let mut rng = StdRng::seed_from_u64(0);
        let canvas = displace_into_frame(img.view(), (5, 5), true, &mut rng).unwrap();
        assert_eq!(canvas.dim(), (5, 5));
        // Cropped size equals the frame, so offsets are forced to zero and
        // the canvas is exactly the top-left 5x5 of the input.
        assert_eq!(canvas, img.slice(s![..5, ..5]).to_owned());
    }

    #[test]
    fn partially_oversized_image_crops_only_the_long_axis() {
        let img = content_image(3, 12);
        let mut rng = StdRng::seed_from_u64(1);
        let canvas = displace_into_frame(img.view(), (8, 10), true, &mut rng).unwrap();
        assert_eq!(canvas.dim(), (8, 10));
        let (top, left) = find_offset(&canvas);
        assert_eq!(left, 0);
        assert_eq!(
            canvas.slice(s![top..top + 3, ..10]),
            img.slice(s![.., ..10])
        );
    }

    #[test]
    fn element_type_is_preserved() {
        let img = Array2::<u8>::from_elem((2, 2), 7);
        let mut rng = StdRng::seed_from_u64(3);
        let canvas: Array2<u8> = displace_into_frame(img.view(), (4, 4), false, &mut rng).unwrap();
        assert_eq!(canvas.dim(), (4, 4));
        assert_eq!(canvas.iter().filter(|&&v| v == 7).count(), 4);
        assert_eq!(canvas.iter().filter(|&&v| v == 0).count(), 12);
    }

    #[test]
    fn stage_rejects_zero_sized_frame() {
        assert!(matches!(
            RandomDisplaceAndPad::new((0, 10)),
            Err(TransformError::Config { .. })
        ));
    }
}
