//! Target-point generation
//!
//! Derives the destination the player must walk to from the first GPS fix
//! of a round. The offset is drawn so that its latitude/longitude components
//! always satisfy `x² + y² = D²` with `D = TARGET_OFFSET_DEG`: the target
//! lands ON the circle of radius D around the origin, never strictly inside
//! it. That placement is part of the game contract (it fixes how far a
//! player has to walk) and must not be "corrected" to uniform-in-disk
//! sampling.

use crate::core::{Coordinate, TARGET_OFFSET_DEG};
use nalgebra::Vector2;
use rand::Rng;

/// Generates target points displaced from an origin by a bounded offset
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetGenerator;

impl TargetGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a target for `origin` using the thread-local RNG
    pub fn generate(&self, origin: Coordinate) -> Coordinate {
        self.generate_with(origin, &mut rand::thread_rng())
    }

    /// Generate a target for `origin` from an explicit random source
    ///
    /// Deterministic for a seeded RNG, which is how the boundary-circle
    /// property is pinned in tests.
    pub fn generate_with<R: Rng>(&self, origin: Coordinate, rng: &mut R) -> Coordinate {
        let offset = self.random_offset(rng);
        Coordinate {
            lat: origin.lat + offset.x,
            lon: origin.lon + offset.y,
        }
    }

    /// Draw a (Δlat, Δlon) offset on the boundary circle of radius D
    fn random_offset<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        let d = TARGET_OFFSET_DEG;

        // x uniform in [0, D), sign flipped with probability 1/2
        let mut x = rng.gen::<f64>() * d;
        if rng.gen_bool(0.5) {
            x = -x;
        }

        // y completes the offset to exactly radius D
        let mut y = (d * d - x * x).sqrt();
        if rng.gen_bool(0.5) {
            y = -y;
        }

        Vector2::new(x, y)
    }
}
