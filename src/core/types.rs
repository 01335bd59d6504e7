//! Core data types for the geo-walk game engine

use crate::core::constants::WIN_THRESHOLD_M;
use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, [-90, 90] for real GPS fixes
    pub lat: f64,
    /// Longitude in decimal degrees, [-180, 180] for real GPS fixes
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Outcome of comparing a live position against the target point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Great-circle distance to the target (meters, non-negative)
    pub distance_m: f64,
    /// True when the player is within the win threshold
    pub reached: bool,
}

impl DistanceResult {
    /// Classify a raw distance against the win threshold
    pub fn from_distance(distance_m: f64) -> Self {
        Self {
            distance_m,
            reached: distance_m <= WIN_THRESHOLD_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reached_flag_follows_threshold() {
        assert!(DistanceResult::from_distance(0.0).reached);
        assert!(DistanceResult::from_distance(100.0).reached);
        assert!(!DistanceResult::from_distance(100.001).reached);
    }
}
