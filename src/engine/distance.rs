//! Great-circle distance and win classification
//!
//! Spherical law-of-cosines distance on a mean-radius Earth. The model
//! error versus an ellipsoid is below ~0.5%, which is irrelevant against
//! a 100 m win threshold and GPS fix noise.

use crate::core::{Coordinate, DistanceResult, EARTH_RADIUS_M};

/// Computes player-to-target distance and classifies the win state
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceEvaluator;

impl DistanceEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the live position against the target point
    ///
    /// Pure and total: symmetric in its arguments, idempotent, and always
    /// finite. The arccosine argument is clamped to [-1, 1] because
    /// floating-point rounding pushes it out of domain for near-identical
    /// (arg slightly above 1) and near-antipodal (slightly below -1)
    /// inputs; an unclamped call would return NaN.
    pub fn evaluate(&self, current: Coordinate, target: Coordinate) -> DistanceResult {
        DistanceResult::from_distance(self.distance_m(current, target))
    }

    /// Great-circle distance between two coordinates (meters)
    pub fn distance_m(&self, current: Coordinate, target: Coordinate) -> f64 {
        let cur_lat = current.lat.to_radians();
        let cur_lon = current.lon.to_radians();
        let tgt_lat = target.lat.to_radians();
        let tgt_lon = target.lon.to_radians();

        let arg = cur_lat.sin() * tgt_lat.sin()
            + tgt_lat.cos() * cur_lat.cos() * (cur_lon - tgt_lon).cos();

        EARTH_RADIUS_M * arg.clamp(-1.0, 1.0).acos()
    }
}
