//! Common API types and data structures

use crate::core::{Coordinate, DistanceResult, MIN_DISPLACEMENT_DEG, MIN_UPDATE_INTERVAL_MS};
use crate::session::{GameState, SessionError};
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Raw fix failed boundary validation
    InvalidFix { error: ValidationError },
    /// Session rejected the operation in its current state
    SessionError { error: SessionError },
    /// Callback handle does not refer to a registered callback
    UnknownCallback { handle_id: u32 },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidFix { error } => write!(f, "invalid fix: {}", error),
            ApiError::SessionError { error } => write!(f, "{}", error),
            ApiError::UnknownCallback { handle_id } => {
                write!(f, "unknown callback handle {}", handle_id)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidFix { error }
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        ApiError::SessionError { error }
    }
}

/// Game events delivered to registered event callbacks
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Target placed from the first fix of a round
    TargetGenerated { target: Coordinate },
    /// A fix was evaluated against the target
    DistanceUpdated { result: DistanceResult },
    /// The player reached the target
    GameWon { final_distance_m: f64 },
    /// Session lifecycle state changed
    StateChanged { old: GameState, new: GameState },
    /// A fix was dropped at the boundary or by the session
    FixRejected { reason: String },
}

/// Location-request cadence the platform collaborator should configure
///
/// The engine does no throttling of its own; these are the values the
/// collaborator passes to its platform location service when subscribing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionSettings {
    /// Minimum interval between fixes (milliseconds)
    pub min_interval_ms: u64,
    /// Minimum displacement between fixes (degrees)
    pub min_displacement_deg: f64,
}

impl Default for SubscriptionSettings {
    fn default() -> Self {
        Self {
            min_interval_ms: MIN_UPDATE_INTERVAL_MS,
            min_displacement_deg: MIN_DISPLACEMENT_DEG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_subscription_settings_match_constants() {
        let settings = SubscriptionSettings::default();
        assert_eq!(settings.min_interval_ms, 1000);
        assert!((settings.min_displacement_deg - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_error_display_carries_context() {
        let err = ApiError::from(ValidationError::LatitudeOutOfRange { lat: 91.0 });
        assert!(err.to_string().contains("91"));

        let err = ApiError::from(SessionError::NotAcceptingFixes {
            state: GameState::Won,
        });
        assert!(err.to_string().contains("finished"));
    }
}
