//! Error types for the preprocessing pipelines.
//!
//! This module defines the error kinds that can surface while building or
//! running a preprocessing pipeline: configuration problems (fatal at build
//! time), per-image geometry failures, and wrapped errors from the underlying
//! image and array primitives. The degenerate random-scale guard is
//! deliberately *not* an error; scaling that would collapse an image to zero
//! size is absorbed as a no-op by the operator itself.

use thiserror::Error;

/// Errors produced by pipeline construction and image transforms.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Error occurred while loading an image from disk.
    #[error("image load")]
    ImageLoad(#[from] image::ImageError),

    /// Invalid pipeline configuration, raised at construction time.
    #[error("configuration: {message}")]
    Config {
        /// A message describing the configuration error.
        message: String,
    },

    /// The target frame is smaller than the image and cropping is disabled.
    #[error(
        "frame ({frame_h}, {frame_w}) is smaller than the image ({img_h}, {img_w}) \
         and cropping is disabled"
    )]
    FrameTooSmall {
        /// Height of the target frame.
        frame_h: usize,
        /// Width of the target frame.
        frame_w: usize,
        /// Height of the input image.
        img_h: usize,
        /// Width of the input image.
        img_w: usize,
    },

    /// Error indicating invalid input to a transform.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error from array reshaping.
    #[error("array shape")]
    Shape(#[from] ndarray::ShapeError),
}

impl TransformError {
    /// Creates a configuration error from a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid-input error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Convenient result alias for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
