//! Fixed game parameters
//!
//! These are contract values, not tuning knobs: changing any of them
//! changes game difficulty, so none are exposed through configuration.

/// Mean Earth radius used for the spherical distance model (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance at which the game is won (meters)
pub const WIN_THRESHOLD_M: f64 = 100.0;

/// Total angular offset of a generated target from its origin (degrees)
pub const TARGET_OFFSET_DEG: f64 = 0.04;

/// Minimum interval a collaborator should request between fixes (milliseconds)
pub const MIN_UPDATE_INTERVAL_MS: u64 = 1000;

/// Minimum displacement a collaborator should request between fixes (degrees)
pub const MIN_DISPLACEMENT_DEG: f64 = 0.001;
