//! Core building blocks of the preprocessing pipelines.
//!
//! This module contains:
//! - Error handling (`errors`)
//! - Shared default parameters (`constants`)
//! - The [`Transform`] trait implemented by every pipeline stage (`traits`)

pub mod constants;
pub mod errors;
pub mod traits;

pub use errors::{TransformError, TransformResult};
pub use traits::Transform;
