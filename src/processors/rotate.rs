//! Rotation that keeps the full content inside the frame.

use crate::core::constants::{DEFAULT_AUGMENT_PROBABILITY, DEFAULT_RANDOM_ROTATE_LIMIT};
use crate::core::{Transform, TransformError, TransformResult};
use crate::processors::pad::pad_to_min_size;
use crate::processors::resize::resize_bilinear;
use crate::utils::{array_to_buffer, buffer_to_array};
use image::Luma;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use ndarray::Array2;
use rand::{Rng, RngCore};

/// Randomly rotates an image without clipping content, filling the border
/// with zeros.
///
/// A plain rotation cuts off strokes that leave the frame near the corners.
/// Instead the image is first zero-padded (centered) to the bounding box of
/// the rotated frame, rotated about the center with bilinear sampling, and
/// resized back to the original dimensions.
#[derive(Debug, Clone)]
pub struct SafeRotate {
    limit_degrees: f32,
    probability: f32,
}

impl SafeRotate {
    /// Creates a new `SafeRotate` drawing angles from
    /// `[-limit_degrees, +limit_degrees]`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the limit is negative or not finite.
    pub fn new(limit_degrees: f32) -> TransformResult<Self> {
        if !limit_degrees.is_finite() || limit_degrees < 0.0 {
            return Err(TransformError::config(format!(
                "rotation limit must be a non-negative finite number of degrees, got {limit_degrees}"
            )));
        }
        Ok(Self {
            limit_degrees,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        })
    }

    /// Sets the probability of applying the rotation at all.
    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Rotates the image by `angle_degrees` (counter-clockwise positive),
    /// preserving the original dimensions.
    pub fn rotate(&self, img: Array2<f32>, angle_degrees: f32) -> TransformResult<Array2<f32>> {
        let (h, w) = img.dim();
        if h == 0 || w == 0 || angle_degrees == 0.0 {
            return Ok(img);
        }

        let theta = angle_degrees.to_radians();
        let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
        let bound_h = (w as f32 * sin + h as f32 * cos).ceil() as usize;
        let bound_w = (w as f32 * cos + h as f32 * sin).ceil() as usize;

        let padded = pad_to_min_size(img.view(), bound_h, bound_w);
        let buf = array_to_buffer(padded)?;
        let rotated = rotate_about_center(&buf, theta, Interpolation::Bilinear, Luma([0.0]));
        let arr = buffer_to_array(rotated)?;

        resize_bilinear(arr, h, w)
    }
}

impl Default for SafeRotate {
    fn default() -> Self {
        Self {
            limit_degrees: DEFAULT_RANDOM_ROTATE_LIMIT,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        }
    }
}

impl Transform for SafeRotate {
    fn name(&self) -> &'static str {
        "safe_rotate"
    }

    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        if rng.gen::<f32>() >= self.probability {
            return Ok(img);
        }
        let angle = rng.gen_range(-self.limit_degrees..=self.limit_degrees);
        self.rotate(img, angle)
    }
}
