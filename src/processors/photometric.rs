//! Pixel-level augmentations: brightness/contrast jitter and gaussian noise.
//!
//! Both operators work in raw intensity space (`[0, 1]`), before
//! normalization, so their parameters keep their photometric meaning.

use crate::core::constants::{
    DEFAULT_AUGMENT_PROBABILITY, DEFAULT_BRIGHTNESS_LIMIT, DEFAULT_CONTRAST_LIMIT,
    DEFAULT_NOISE_VAR_LIMIT, MAX_8BIT_INTENSITY,
};
use crate::core::{Transform, TransformError, TransformResult};
use ndarray::Array2;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

/// Randomly jitters brightness and contrast.
///
/// Applies `clamp(alpha * x + beta, 0, 1)` with
/// `alpha = 1 + uniform(-contrast_limit, +contrast_limit)` and
/// `beta = uniform(-brightness_limit, +brightness_limit)`.
#[derive(Debug, Clone)]
pub struct RandomBrightnessContrast {
    brightness_limit: f32,
    contrast_limit: f32,
    probability: f32,
}

impl RandomBrightnessContrast {
    /// Creates the stage with default limits (0.2 / 0.2) and probability.
    pub fn new() -> Self {
        Self {
            brightness_limit: DEFAULT_BRIGHTNESS_LIMIT,
            contrast_limit: DEFAULT_CONTRAST_LIMIT,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        }
    }

    /// Overrides the brightness and contrast bounds.
    pub fn with_limits(mut self, brightness_limit: f32, contrast_limit: f32) -> Self {
        self.brightness_limit = brightness_limit.abs();
        self.contrast_limit = contrast_limit.abs();
        self
    }

    /// Sets the probability of applying the jitter at all.
    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Applies a fixed contrast factor `alpha` and brightness shift `beta`.
    pub fn adjust(&self, img: Array2<f32>, alpha: f32, beta: f32) -> Array2<f32> {
        img.mapv_into(|v| (alpha * v + beta).clamp(0.0, 1.0))
    }
}

impl Default for RandomBrightnessContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for RandomBrightnessContrast {
    fn name(&self) -> &'static str {
        "random_brightness_contrast"
    }

    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        if rng.gen::<f32>() >= self.probability {
            return Ok(img);
        }
        let alpha = 1.0 + rng.gen_range(-self.contrast_limit..=self.contrast_limit);
        let beta = rng.gen_range(-self.brightness_limit..=self.brightness_limit);
        Ok(self.adjust(img, alpha, beta))
    }
}

/// Adds i.i.d. zero-mean gaussian noise to every pixel.
///
/// The variance is drawn uniformly from `var_limit`, which is expressed on
/// the 8-bit intensity scale (the convention handwriting datasets quote);
/// the sampled sigma is divided by 255 to match the unit-scale working
/// space. Output is clamped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct GaussNoise {
    var_limit: (f32, f32),
    probability: f32,
}

impl GaussNoise {
    /// Creates the stage with the default variance range (10, 50) and
    /// probability.
    pub fn new() -> Self {
        Self {
            var_limit: DEFAULT_NOISE_VAR_LIMIT,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        }
    }

    /// Overrides the variance range.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the range is not `0 <= lo <= hi`.
    pub fn with_var_limit(mut self, var_limit: (f32, f32)) -> TransformResult<Self> {
        let (lo, hi) = var_limit;
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || lo > hi {
            return Err(TransformError::config(format!(
                "noise variance range must satisfy 0 <= lo <= hi, got ({lo}, {hi})"
            )));
        }
        self.var_limit = var_limit;
        Ok(self)
    }

    /// Sets the probability of applying the noise at all.
    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Default for GaussNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for GaussNoise {
    fn name(&self) -> &'static str {
        "gauss_noise"
    }

    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        if rng.gen::<f32>() >= self.probability {
            return Ok(img);
        }
        let var = rng.gen_range(self.var_limit.0..=self.var_limit.1);
        let sigma = var.sqrt() / MAX_8BIT_INTENSITY;
        let normal = Normal::new(0.0f32, sigma)
            .map_err(|e| TransformError::invalid_input(format!("noise distribution: {e}")))?;
        Ok(img.mapv_into(|v| (v + normal.sample(&mut *rng)).clamp(0.0, 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn identity_parameters_leave_the_image_unchanged() {
        let img = Array2::from_shape_fn((4, 4), |(y, x)| (y * 4 + x) as f32 / 16.0);
        let stage = RandomBrightnessContrast::new();
        assert_eq!(stage.adjust(img.clone(), 1.0, 0.0), img);
    }

    #[test]
    fn adjustment_clamps_to_unit_range() {
        let img = Array2::from_elem((2, 2), 0.9);
        let stage = RandomBrightnessContrast::new();
        let bright = stage.adjust(img.clone(), 2.0, 0.5);
        assert!(bright.iter().all(|&v| v == 1.0));
        let dark = stage.adjust(img, 1.0, -2.0);
        assert!(dark.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_probability_is_identity() {
        let img = Array2::from_elem((4, 4), 0.5);
        let mut rng = StdRng::seed_from_u64(5);
        let jitter = RandomBrightnessContrast::new().with_probability(0.0);
        assert_eq!(jitter.apply(img.clone(), &mut rng).unwrap(), img);
        let noise = GaussNoise::new().with_probability(0.0);
        assert_eq!(noise.apply(img.clone(), &mut rng).unwrap(), img);
    }

    #[test]
    fn noise_stays_in_unit_range_and_perturbs_pixels() {
        let img = Array2::from_elem((32, 32), 0.5);
        let mut rng = StdRng::seed_from_u64(5);
        let noise = GaussNoise::new().with_probability(1.0);
        let out = noise.apply(img.clone(), &mut rng).unwrap();
        assert_eq!(out.dim(), (32, 32));
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(out.iter().zip(img.iter()).any(|(a, b)| a != b));
    }

    #[test]
    fn noise_rejects_inverted_variance_range() {
        assert!(matches!(
            GaussNoise::new().with_var_limit((50.0, 10.0)),
            Err(TransformError::Config { .. })
        ));
    }
}
