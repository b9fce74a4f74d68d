//! Train/test preprocessing pipelines for word, line and form images.
//!
//! A [`TransformConfig`] is turned into a [`TransformPipelines`] pair once,
//! at dataset-setup time; the pipelines are then reused for every image. The
//! train pipeline applies stochastic augmentations, the test pipeline only
//! deterministic normalization, and both share the same DPI scale and
//! normalization parameters.
//!
//! Stage ordering is fixed: DPI adjustment always comes first so augmentation
//! operates at the working resolution, normalization is the last
//! content-altering stage so augmentation operates in raw intensity space,
//! and displacement/padding runs last of all so the output frame size is
//! exact.

pub mod config;

pub use config::{ParseMethod, TransformConfig};

use crate::core::constants::FORM_PERSPECTIVE_SCALE;
use crate::core::{Transform, TransformResult};
use crate::processors::{
    DpiAdjust, GaussNoise, Normalize, PadToMinSize, RandomBrightnessContrast,
    RandomDisplaceAndPad, RandomPerspective, SafeRandomScale, SafeRotate,
};
use ndarray::Array2;
use rand::RngCore;
use tracing::debug;

/// An ordered sequence of transform stages.
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    fn new(stages: Vec<Box<dyn Transform>>) -> Self {
        Self { stages }
    }

    /// Runs the image through every stage in order.
    ///
    /// Deterministic stages ignore the random source, so a pipeline without
    /// stochastic stages produces bit-identical output on repeated calls.
    ///
    /// # Errors
    ///
    /// Propagates the first stage error; there are no retries and no partial
    /// recovery, the caller decides whether to skip or abort.
    pub fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        let mut img = img;
        for stage in &self.stages {
            img = stage.apply(img, rng)?;
        }
        Ok(img)
    }

    /// Number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The stage identifiers in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

/// The train/test pipeline pair for one dataset configuration.
#[derive(Debug)]
pub struct TransformPipelines {
    /// Stochastic augmentation pipeline used during training.
    pub train: Pipeline,
    /// Deterministic pipeline used during validation and testing.
    pub test: Pipeline,
}

impl TransformPipelines {
    /// Builds the pipeline pair for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config fails validation.
    pub fn new(config: &TransformConfig) -> TransformResult<Self> {
        config.validate()?;
        let pipelines = match config.parse_method {
            // Word and line crops share one recipe; the granularities have
            // not diverged in practice.
            ParseMethod::Word | ParseMethod::Line => Self::text_pipelines(config)?,
            ParseMethod::Form => Self::form_pipelines(config)?,
        };
        debug!(
            parse_method = %config.parse_method,
            train_stages = pipelines.train.len(),
            test_stages = pipelines.test.len(),
            "built preprocessing pipelines"
        );
        Ok(pipelines)
    }

    fn text_pipelines(config: &TransformConfig) -> TransformResult<Self> {
        let (mean, std) = config.normalize_params;
        let train = Pipeline::new(vec![
            Box::new(DpiAdjust::new(config.scale)?),
            Box::new(SafeRandomScale::new(config.random_scale_limit)?),
            Box::new(SafeRotate::new(config.random_rotate_limit)?),
            Box::new(RandomBrightnessContrast::new()),
            Box::new(GaussNoise::new()),
            Box::new(Normalize::new(mean, std)?),
        ]);
        let test = Pipeline::new(vec![
            Box::new(DpiAdjust::new(config.scale)?),
            Box::new(Normalize::new(mean, std)?),
        ]);
        Ok(Self { train, test })
    }

    fn form_pipelines(config: &TransformConfig) -> TransformResult<Self> {
        let (mean, std) = config.normalize_params;
        let (max_h, max_w) = config.max_img_size;
        let padded = config.padded_size();

        let train = Pipeline::new(vec![
            Box::new(DpiAdjust::new(config.scale)?),
            Box::new(SafeRandomScale::new(config.random_scale_limit)?),
            Box::new(SafeRotate::new(config.random_rotate_limit)?),
            Box::new(RandomBrightnessContrast::new()),
            Box::new(RandomPerspective::new(FORM_PERSPECTIVE_SCALE)?),
            Box::new(GaussNoise::new()),
            Box::new(Normalize::new(mean, std)?),
            Box::new(RandomDisplaceAndPad::new(padded)?.with_crop(true)),
        ]);
        let test = Pipeline::new(vec![
            Box::new(DpiAdjust::new(config.scale)?),
            Box::new(Normalize::new(mean, std)?),
            Box::new(PadToMinSize::new(max_h, max_w)?),
        ]);
        Ok(Self { train, test })
    }
}
