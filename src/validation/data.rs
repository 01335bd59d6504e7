//! Raw fix validation at the API boundary
//!
//! The engine math is total and never validates its inputs; anything that
//! reaches it must already be a plausible GPS fix. This validator is the
//! gate that enforces that.

use crate::core::Coordinate;
use std::fmt;

/// Reasons a raw fix is rejected before reaching the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Latitude or longitude is NaN or infinite
    NonFiniteValue { lat: f64, lon: f64 },
    /// Latitude outside [-90, 90]
    LatitudeOutOfRange { lat: f64 },
    /// Longitude outside [-180, 180]
    LongitudeOutOfRange { lon: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonFiniteValue { lat, lon } => {
                write!(f, "fix is not finite: lat {}, lon {}", lat, lon)
            }
            ValidationError::LatitudeOutOfRange { lat } => {
                write!(f, "latitude {} outside [-90, 90]", lat)
            }
            ValidationError::LongitudeOutOfRange { lon } => {
                write!(f, "longitude {} outside [-180, 180]", lon)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates raw latitude/longitude pairs into `Coordinate`s
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateValidator;

impl CoordinateValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a raw fix and admit it as a `Coordinate`
    pub fn validate(&self, lat: f64, lon: f64) -> Result<Coordinate, ValidationError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ValidationError::NonFiniteValue { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange { lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::LongitudeOutOfRange { lon });
        }
        Ok(Coordinate::new(lat, lon))
    }
}
