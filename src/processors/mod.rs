//! Image transform operators used by the preprocessing pipelines.
//!
//! # Modules
//!
//! * `dpi` - Fixed rescaling to a common working resolution
//! * `scale` - Random uniform scaling with a degenerate-size guard
//! * `rotate` - Rotation that keeps the full content inside the frame
//! * `photometric` - Brightness/contrast jitter and gaussian noise
//! * `perspective` - Random projective distortion for full pages
//! * `normalize` - Mean/std intensity normalization
//! * `displace` - Random displacement within a fixed zero-padded frame
//! * `pad` - Deterministic centered padding up to a minimum size
//! * `resize` - The shared bilinear resize primitive

pub mod displace;
pub mod dpi;
pub mod normalize;
pub mod pad;
pub mod perspective;
pub mod photometric;
pub mod resize;
pub mod rotate;
pub mod scale;

pub use displace::{RandomDisplaceAndPad, displace_into_frame};
pub use dpi::DpiAdjust;
pub use normalize::Normalize;
pub use pad::{PadToMinSize, pad_to_min_size};
pub use perspective::RandomPerspective;
pub use photometric::{GaussNoise, RandomBrightnessContrast};
pub use resize::resize_bilinear;
pub use rotate::SafeRotate;
pub use scale::SafeRandomScale;
