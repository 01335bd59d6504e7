//! Geo-Walk Game Engine
//!
//! A walk-to-target GPS game: the first location fix of a round places a
//! random target 0.04 degrees away, every later fix is measured against it
//! with a great-circle distance, and the round is won within 100 meters.
//! The UI and platform location plumbing live outside this crate and talk
//! to it through the callback API.

pub mod api;
pub mod core;
pub mod engine;
pub mod session;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::api::{
    ApiError, ApiResult, CallbackGameApi, CallbackHandle, FormattedUpdate, GameEvent,
    SubscriptionSettings, UpdateFormatter,
};
pub use crate::core::{
    Coordinate, DistanceResult, EARTH_RADIUS_M, TARGET_OFFSET_DEG, WIN_THRESHOLD_M,
};
pub use crate::engine::{DistanceEvaluator, TargetGenerator};
pub use crate::session::{GameSession, GameState, SessionError, SessionResult};
pub use crate::utils::{ConfigError, EngineConfig};
pub use crate::validation::{CoordinateValidator, ValidationError};
