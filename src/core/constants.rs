//! Default parameters shared across the preprocessing pipelines.

/// Default DPI base scale. Assuming A4 paper this gives roughly 140 DPI.
pub const DEFAULT_BASE_SCALE: f32 = 0.5;

/// Default bound for the random scale factor, as a fraction of 1.
pub const DEFAULT_RANDOM_SCALE_LIMIT: f32 = 0.1;

/// Default bound for the random rotation angle, in degrees.
pub const DEFAULT_RANDOM_ROTATE_LIMIT: f32 = 10.0;

/// Default probability for stochastic augmentation stages.
pub const DEFAULT_AUGMENT_PROBABILITY: f32 = 0.5;

/// Default brightness shift bound, as a fraction of full intensity scale.
pub const DEFAULT_BRIGHTNESS_LIMIT: f32 = 0.2;

/// Default contrast factor bound around 1.
pub const DEFAULT_CONTRAST_LIMIT: f32 = 0.2;

/// Default gaussian noise variance range, expressed on the 8-bit intensity
/// scale that dataset annotations usually quote.
pub const DEFAULT_NOISE_VAR_LIMIT: (f32, f32) = (10.0, 50.0);

/// Corner jitter range used by the form-page perspective augmentation.
pub const FORM_PERSPECTIVE_SCALE: (f32, f32) = (0.03, 0.05);

/// Intensity range of an 8-bit source image; unit-scale images are obtained
/// by dividing by this value on load.
pub const MAX_8BIT_INTENSITY: f32 = 255.0;
