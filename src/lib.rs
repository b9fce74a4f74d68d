//! # htr-preprocess
//!
//! Image preprocessing pipelines for handwriting recognition (HTR) datasets.
//!
//! Scanned handwriting corpora mix word crops, line strips and full form
//! pages at wildly different resolutions. This crate normalizes them into a
//! common working resolution and builds two fixed pipelines per dataset
//! configuration: a stochastic train-time augmentation pipeline and a
//! deterministic test-time normalization pipeline.
//!
//! ## Components
//!
//! * [`pipeline`] - Pipeline configuration and the train/test pipeline pair
//! * [`processors`] - The individual transform operators (DPI adjustment,
//!   safe random scaling, safe rotation, photometric jitter, perspective
//!   distortion, normalization, displacement and padding)
//! * [`core`] - The [`Transform`](core::Transform) trait, error types and
//!   shared defaults
//! * [`utils`] - Image loading and array/buffer conversions
//!
//! Randomness is threaded explicitly: every stochastic stage draws from a
//! caller-provided `rand::RngCore`, so runs are seedable and each worker
//! thread can own its generator.
//!
//! ## Quick start
//!
//! ```rust
//! use htr_preprocess::prelude::*;
//! use ndarray::Array2;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), TransformError> {
//! let config = TransformConfig::new((600, 480), ParseMethod::Form, (0.5, 0.5));
//! let pipelines = TransformPipelines::new(&config)?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let page = Array2::<f32>::zeros((512, 400));
//! let augmented = pipelines.train.apply(page.clone(), &mut rng)?;
//! let normalized = pipelines.test.apply(page, &mut rng)?;
//! # let _ = (augmented, normalized);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Brings the essentials into scope with a single use statement:
///
/// ```rust
/// use htr_preprocess::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{Transform, TransformError, TransformResult};
    pub use crate::pipeline::{ParseMethod, Pipeline, TransformConfig, TransformPipelines};
    pub use crate::utils::load_grayscale;
}
