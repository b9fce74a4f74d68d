//! Configuration for the dataset preprocessing pipelines.

use crate::core::constants::{
    DEFAULT_BASE_SCALE, DEFAULT_RANDOM_ROTATE_LIMIT, DEFAULT_RANDOM_SCALE_LIMIT,
};
use crate::core::{TransformError, TransformResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of the dataset images a pipeline is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMethod {
    /// Single-word crops.
    Word,
    /// Full text-line strips.
    Line,
    /// Whole form pages.
    Form,
}

impl fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMethod::Word => write!(f, "word"),
            ParseMethod::Line => write!(f, "line"),
            ParseMethod::Form => write!(f, "form"),
        }
    }
}

impl FromStr for ParseMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(ParseMethod::Word),
            "line" => Ok(ParseMethod::Line),
            "form" => Ok(ParseMethod::Form),
            other => Err(TransformError::config(format!(
                "{other} is not a valid parse method"
            ))),
        }
    }
}

/// Configuration for a pair of train/test preprocessing pipelines.
///
/// Immutable after construction; the parse method decides which operator
/// sequence is built. Optional knobs fall back to dataset-proven defaults
/// and can be overridden with the `with_*` setters or via deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Maximum source image size in the dataset, as `(height, width)`.
    pub max_img_size: (usize, usize),
    /// Which pipeline recipe to build.
    pub parse_method: ParseMethod,
    /// Normalization parameters as `(mean, std)`, on the unit intensity
    /// scale.
    pub normalize_params: (f32, f32),
    /// Fixed DPI base scale applied to every image.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Bound for the train-time random scale factor.
    #[serde(default = "default_random_scale_limit")]
    pub random_scale_limit: f32,
    /// Bound for the train-time random rotation, in degrees.
    #[serde(default = "default_random_rotate_limit")]
    pub random_rotate_limit: f32,
}

fn default_scale() -> f32 {
    DEFAULT_BASE_SCALE
}

fn default_random_scale_limit() -> f32 {
    DEFAULT_RANDOM_SCALE_LIMIT
}

fn default_random_rotate_limit() -> f32 {
    DEFAULT_RANDOM_ROTATE_LIMIT
}

impl TransformConfig {
    /// Creates a configuration with default scale and augmentation bounds.
    pub fn new(
        max_img_size: (usize, usize),
        parse_method: ParseMethod,
        normalize_params: (f32, f32),
    ) -> Self {
        Self {
            max_img_size,
            parse_method,
            normalize_params,
            scale: DEFAULT_BASE_SCALE,
            random_scale_limit: DEFAULT_RANDOM_SCALE_LIMIT,
            random_rotate_limit: DEFAULT_RANDOM_ROTATE_LIMIT,
        }
    }

    /// Overrides the DPI base scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Overrides the random scale bound.
    pub fn with_random_scale_limit(mut self, limit: f32) -> Self {
        self.random_scale_limit = limit;
        self
    }

    /// Overrides the random rotation bound, in degrees.
    pub fn with_random_rotate_limit(mut self, limit: f32) -> Self {
        self.random_rotate_limit = limit;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-positive frame dimensions,
    /// non-positive scale, negative augmentation bounds, or a non-positive
    /// normalization std.
    pub fn validate(&self) -> TransformResult<()> {
        let (h, w) = self.max_img_size;
        if h == 0 || w == 0 {
            return Err(TransformError::config(format!(
                "max image size must have positive dimensions, got ({h}, {w})"
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TransformError::config(format!(
                "base scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        if !self.random_scale_limit.is_finite() || self.random_scale_limit < 0.0 {
            return Err(TransformError::config(format!(
                "random scale limit must be a non-negative finite number, got {}",
                self.random_scale_limit
            )));
        }
        if !self.random_rotate_limit.is_finite() || self.random_rotate_limit < 0.0 {
            return Err(TransformError::config(format!(
                "random rotate limit must be a non-negative finite number, got {}",
                self.random_rotate_limit
            )));
        }
        let (mean, std) = self.normalize_params;
        if !mean.is_finite() || !std.is_finite() || std <= 0.0 {
            return Err(TransformError::config(format!(
                "normalization params must be finite with std > 0, got ({mean}, {std})"
            )));
        }
        Ok(())
    }

    /// The train-time displacement frame for form pages.
    ///
    /// Derived from the maximum possible random scale
    /// (`scale * (1 + random_scale_limit)`) applied to the maximum image
    /// size, so the frame always contains a maximally-scaled image before
    /// displacement.
    pub fn padded_size(&self) -> (usize, usize) {
        let max_scale = self.scale * (1.0 + self.random_scale_limit);
        let (h, w) = self.max_img_size;
        (
            (max_scale * h as f32).ceil() as usize,
            (max_scale * w as f32).ceil() as usize,
        )
    }
}
