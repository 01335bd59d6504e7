//! API boundary consumed by the UI/location collaborator
//!
//! The collaborator owns permissions, the platform location service, and
//! rendering; this module gives it a callback-based subscription surface,
//! structured errors, and display formatting.

pub mod callback;
pub mod formatting;
pub mod types;

pub use callback::{CallbackGameApi, CallbackHandle, DistanceCallback, EventCallback};
pub use formatting::{FormattedUpdate, UpdateFormatter};
pub use types::{ApiError, ApiResult, GameEvent, SubscriptionSettings};
