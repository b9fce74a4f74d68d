//! Random perspective distortion for full-page images.

use crate::core::constants::DEFAULT_AUGMENT_PROBABILITY;
use crate::core::{Transform, TransformError, TransformResult};
use crate::utils::{array_to_buffer, buffer_to_array};
use image::Luma;
use imageproc::geometric_transformations::{Interpolation, Projection, warp};
use ndarray::Array2;
use rand::{Rng, RngCore};
use tracing::debug;

/// Applies a random projective warp, simulating a camera or scanner that is
/// not perfectly parallel to the page.
///
/// A jitter magnitude `s` is drawn uniformly from `scale`; each corner of
/// the frame is displaced by offsets uniform in `[-s * dim, +s * dim]`, and
/// the projective transform through the four point pairs is applied with a
/// zero border. The frame size is unchanged. A degenerate corner draw (no
/// valid projection) falls back to returning the image unchanged.
#[derive(Debug, Clone)]
pub struct RandomPerspective {
    scale: (f32, f32),
    probability: f32,
}

impl RandomPerspective {
    /// Creates a new `RandomPerspective` with the given jitter range.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the range is not `0 <= lo <= hi`.
    pub fn new(scale: (f32, f32)) -> TransformResult<Self> {
        let (lo, hi) = scale;
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || lo > hi {
            return Err(TransformError::config(format!(
                "perspective scale range must satisfy 0 <= lo <= hi, got ({lo}, {hi})"
            )));
        }
        Ok(Self {
            scale,
            probability: DEFAULT_AUGMENT_PROBABILITY,
        })
    }

    /// Sets the probability of applying the warp at all.
    pub fn with_probability(mut self, probability: f32) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Transform for RandomPerspective {
    fn name(&self) -> &'static str {
        "random_perspective"
    }

    fn apply(&self, img: Array2<f32>, rng: &mut dyn RngCore) -> TransformResult<Array2<f32>> {
        if rng.gen::<f32>() >= self.probability {
            return Ok(img);
        }

        let (h, w) = img.dim();
        if h < 2 || w < 2 {
            return Ok(img);
        }
        let (fh, fw) = (h as f32, w as f32);

        let s = rng.gen_range(self.scale.0..=self.scale.1);
        let (dx, dy) = (s * fw, s * fh);

        let from = [(0.0, 0.0), (fw, 0.0), (fw, fh), (0.0, fh)];
        let mut to = from;
        for corner in &mut to {
            corner.0 += rng.gen_range(-dx..=dx);
            corner.1 += rng.gen_range(-dy..=dy);
        }

        let Some(projection) = Projection::from_control_points(from, to) else {
            debug!("degenerate perspective corner draw, skipping warp");
            return Ok(img);
        };

        let buf = array_to_buffer(img)?;
        let warped = warp(&buf, &projection, Interpolation::Bilinear, Luma([0.0]));
        buffer_to_array(warped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn warp_preserves_frame_size() {
        let img = Array2::from_elem((40, 60), 0.5);
        let stage = RandomPerspective::new((0.03, 0.05))
            .unwrap()
            .with_probability(1.0);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..10 {
            let out = stage.apply(img.clone(), &mut rng).unwrap();
            assert_eq!(out.dim(), (40, 60));
        }
    }

    #[test]
    fn zero_probability_is_identity() {
        let img = Array2::from_elem((10, 10), 0.5);
        let stage = RandomPerspective::new((0.03, 0.05))
            .unwrap()
            .with_probability(0.0);
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(stage.apply(img.clone(), &mut rng).unwrap(), img);
    }

    #[test]
    fn tiny_images_pass_through() {
        let img = Array2::from_elem((1, 1), 0.5);
        let stage = RandomPerspective::new((0.03, 0.05))
            .unwrap()
            .with_probability(1.0);
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(stage.apply(img.clone(), &mut rng).unwrap(), img);
    }

    #[test]
    fn rejects_invalid_scale_range() {
        assert!(matches!(
            RandomPerspective::new((0.05, 0.03)),
            Err(TransformError::Config { .. })
        ));
        assert!(matches!(
            RandomPerspective::new((-0.01, 0.05)),
            Err(TransformError::Config { .. })
        ));
    }
}
