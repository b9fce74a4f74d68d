//! Utility functions for the preprocessing pipelines.

pub mod image;

pub use image::{
    GrayBufferF32, array_to_buffer, array_to_gray, buffer_to_array, gray_to_array, load_grayscale,
};

/// Initializes the tracing subscriber for logging.
///
/// Sets up the tracing subscriber with environment filter and formatting
/// layer. Typically called once at application start.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
