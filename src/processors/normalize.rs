//! Intensity normalization with dataset mean and standard deviation.

use crate::core::{Transform, TransformError, TransformResult};
use ndarray::Array2;
use rand::RngCore;

/// Normalizes unit-scale intensities to `(x - mean) / std`.
///
/// Always the last content-altering stage in a pipeline, so every
/// augmentation before it operates in raw intensity space. Train and test
/// pipelines built from one config share the same parameters.
#[derive(Debug, Clone)]
pub struct Normalize {
    mean: f32,
    std: f32,
}

impl Normalize {
    /// Creates a new `Normalize` with the given dataset statistics.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `std` is not a positive finite
    /// number or `mean` is not finite.
    pub fn new(mean: f32, std: f32) -> TransformResult<Self> {
        if !mean.is_finite() {
            return Err(TransformError::config(format!(
                "normalization mean must be finite, got {mean}"
            )));
        }
        if !std.is_finite() || std <= 0.0 {
            return Err(TransformError::config(format!(
                "normalization std must be a positive finite number, got {std}"
            )));
        }
        Ok(Self { mean, std })
    }

    /// Applies the normalization.
    pub fn normalize(&self, img: Array2<f32>) -> Array2<f32> {
        let (mean, std) = (self.mean, self.std);
        img.mapv_into(|v| (v - mean) / std)
    }
}

impl Transform for Normalize {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn apply(&self, img: Array2<f32>, _rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        Ok(self.normalize(img))
    }
}
