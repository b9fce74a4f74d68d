//! Core trait implemented by every pipeline stage.

use crate::core::errors::TransformResult;
use ndarray::Array2;
use rand::RngCore;

/// A single preprocessing stage operating on a grayscale intensity array.
///
/// Stages consume and return owned arrays so a pipeline can move the image
/// through without cloning. Stochastic stages draw from the caller-provided
/// random source; deterministic stages ignore it. Threading the generator
/// through explicitly keeps runs seedable and lets each worker thread own its
/// generator.
pub trait Transform: std::fmt::Debug + Send + Sync {
    /// A short stable identifier for the stage, used in logs and tests.
    fn name(&self) -> &'static str;

    /// Applies the stage to an image.
    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>>;
}
