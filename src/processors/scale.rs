//! Random uniform scaling with a degenerate-size guard.

use crate::core::constants::{DEFAULT_AUGMENT_PROBABILITY, DEFAULT_RANDOM_SCALE_LIMIT};
use crate::core::{Transform, TransformError, TransformResult};
use crate::processors::resize::resize_bilinear;
use ndarray::Array2;
use rand::{Rng, RngCore};

/// Randomly rescales an image by a factor drawn from `[1 - limit, 1 + limit]`.
///
/// Checks the candidate dimensions before delegating to the resize primitive:
/// a draw that would collapse an already-small crop to zero size is absorbed
/// as a no-op instead of failing. The no-op threshold is `<= 0`, not `< 1`;
/// a one-pixel result is still a valid resize.
#[derive(Debug, Clone)]
pub struct SafeRandomScale {
    limit: f32,
    probability: f32,
}

impl SafeRandomScale {
    /// Creates a new `SafeRandomScale` with the given scale-factor bound and
    /// the default application probability.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `limit` is negative or not finite.
    pub fn new(limit: f32) -> TransformResult<Self> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(TransformError::config(format!(
                "random scale limit must be a non-negative finite number, got {limit}"
            )));
        }
        Ok(Self {
            limit,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        })
    }

    /// Sets the probability of applying the scaling at all.
    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Rescales the image by `factor`, flooring the candidate dimensions.
    ///
    /// Returns the image unchanged when either candidate dimension is `<= 0`.
    pub fn rescale(&self, img: Array2<f32>, factor: f32) -> TransformResult<Array2<f32>> {
        let (h, w) = img.dim();
        let new_h = (h as f32 * factor).floor() as i64;
        let new_w = (w as f32 * factor).floor() as i64;
        if new_h <= 0 || new_w <= 0 {
            return Ok(img);
        }
        resize_bilinear(img, new_h as usize, new_w as usize)
    }
}

impl Default for SafeRandomScale {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RANDOM_SCALE_LIMIT,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        }
    }
}

impl Transform for SafeRandomScale {
    fn name(&self) -> &'static str {
        "safe_random_scale"
    }

    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        if rng.gen::<f32>() >= self.probability {
            return Ok(img);
        }
        let delta = rng.gen_range(-self.limit..=self.limit);
        self.rescale(img, 1.0 + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn degenerate_factor_is_a_no_op() {
        let img = Array2::from_shape_fn((3, 3), |(y, x)| (y * 3 + x) as f32 / 9.0);
        let scaler = SafeRandomScale::new(0.1).unwrap();
        // 3 * 0.1 = 0.3 -> floor 0: both dims collapse, input returned as is.
        let out = scaler.rescale(img.clone(), 0.1).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn one_pixel_result_is_still_resized() {
        let img = Array2::from_elem((3, 3), 0.5);
        let scaler = SafeRandomScale::new(0.1).unwrap();
        // 3 * 0.4 = 1.2 -> floor 1: above the threshold, so resize happens.
        let out = scaler.rescale(img, 0.4).unwrap();
        assert_eq!(out.dim(), (1, 1));
    }

    #[test]
    fn upscaling_floors_dimensions() {
        let img = Array2::from_elem((10, 10), 0.5);
        let scaler = SafeRandomScale::new(0.1).unwrap();
        let out = scaler.rescale(img, 1.55).unwrap();
        assert_eq!(out.dim(), (15, 15));
    }

    #[test]
    fn sampled_dimensions_stay_within_bounds() {
        let scaler = SafeRandomScale::new(0.1).unwrap().with_probability(1.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let img = Array2::from_elem((100, 100), 0.5);
            let (h, w) = scaler.apply(img, &mut rng).unwrap().dim();
            assert!((90..=110).contains(&h));
            assert!((90..=110).contains(&w));
        }
    }

    #[test]
    fn zero_probability_never_scales() {
        let scaler = SafeRandomScale::new(0.1).unwrap().with_probability(0.0);
        let mut rng = StdRng::seed_from_u64(7);
        let img = Array2::from_elem((10, 10), 0.5);
        let out = scaler.apply(img.clone(), &mut rng).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn rejects_negative_limit() {
        assert!(matches!(
            SafeRandomScale::new(-0.1),
            Err(TransformError::Config { .. })
        ));
    }
}
