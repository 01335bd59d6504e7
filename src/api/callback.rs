//! Callback-based game API
//!
//! The push-based boundary between the engine and its UI/location
//! collaborator. The collaborator registers callbacks, drives the
//! permission lifecycle, and pushes each raw fix through `submit_fix`;
//! the engine answers with distance updates and game events. `shutdown`
//! tears down every registration, so a collaborator that calls it when
//! its screen stops cannot leak the update source.

use crate::api::types::{ApiError, ApiResult, GameEvent, SubscriptionSettings};
use crate::core::{Coordinate, DistanceResult};
use crate::session::{GameSession, GameState};
use crate::validation::CoordinateValidator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use tracing::{debug, info};

/// Callback function type for distance updates
pub type DistanceCallback = Box<dyn Fn(DistanceResult) + Send>;

/// Callback function type for game events
pub type EventCallback = Box<dyn Fn(GameEvent) + Send>;

/// Callback registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u32);

impl CallbackHandle {
    fn new(id: u32) -> Self {
        CallbackHandle(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Callback-based game API
pub struct CallbackGameApi {
    /// Round state machine
    session: GameSession,
    /// Boundary validation for raw fixes
    validator: CoordinateValidator,
    /// Random source for target placement
    rng: StdRng,
    /// Cadence the collaborator should request from its location service
    settings: SubscriptionSettings,
    /// Callback handle counter
    callback_counter: u32,
    /// Distance callbacks
    distance_callbacks: HashMap<CallbackHandle, DistanceCallback>,
    /// Event callbacks
    event_callbacks: HashMap<CallbackHandle, EventCallback>,
}

impl CallbackGameApi {
    /// Create an API with an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an API with a fixed seed, for reproducible rounds
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            session: GameSession::new(),
            validator: CoordinateValidator::new(),
            rng,
            settings: SubscriptionSettings::default(),
            callback_counter: 0,
            distance_callbacks: HashMap::new(),
            event_callbacks: HashMap::new(),
        }
    }

    /// Current session lifecycle state
    pub fn state(&self) -> GameState {
        self.session.state()
    }

    /// Target of the current round, if placed
    pub fn target(&self) -> Option<Coordinate> {
        self.session.target()
    }

    /// Most recent evaluation of the current round
    pub fn last_result(&self) -> Option<DistanceResult> {
        self.session.last_result()
    }

    /// Cadence values for the collaborator's location request
    pub fn subscription_settings(&self) -> SubscriptionSettings {
        self.settings
    }

    /// Register a distance callback
    pub fn register_distance_callback(&mut self, callback: DistanceCallback) -> CallbackHandle {
        self.callback_counter += 1;
        let handle = CallbackHandle::new(self.callback_counter);
        self.distance_callbacks.insert(handle, callback);
        handle
    }

    /// Register an event callback
    pub fn register_event_callback(&mut self, callback: EventCallback) -> CallbackHandle {
        self.callback_counter += 1;
        let handle = CallbackHandle::new(self.callback_counter);
        self.event_callbacks.insert(handle, callback);
        handle
    }

    /// Unregister a callback
    pub fn unregister_callback(&mut self, handle: CallbackHandle) -> ApiResult<()> {
        let removed = self.distance_callbacks.remove(&handle).is_some()
            || self.event_callbacks.remove(&handle).is_some();

        if removed {
            Ok(())
        } else {
            Err(ApiError::UnknownCallback {
                handle_id: handle.id(),
            })
        }
    }

    /// Number of registered (distance, event) callbacks
    pub fn callback_count(&self) -> (usize, usize) {
        (self.distance_callbacks.len(), self.event_callbacks.len())
    }

    /// Start a game from idle by requesting location permission
    pub fn start_game(&mut self) -> ApiResult<()> {
        self.lifecycle_step(|session| session.request_permission())
    }

    /// Record that the collaborator obtained location permission
    pub fn grant_permission(&mut self) -> ApiResult<()> {
        self.lifecycle_step(|session| session.permission_granted())
    }

    /// Record that the collaborator was refused location permission
    pub fn deny_permission(&mut self) -> ApiResult<()> {
        self.lifecycle_step(|session| session.permission_denied())
    }

    /// Discard the current round and wait for a fresh first fix
    pub fn new_game(&mut self) -> ApiResult<()> {
        self.lifecycle_step(|session| session.new_game())
    }

    /// Push one raw fix through the engine
    ///
    /// Validates the fix, feeds the session, and fires distance and event
    /// callbacks. The first accepted fix of a round emits
    /// `TargetGenerated`; a winning fix emits `GameWon`.
    pub fn submit_fix(&mut self, lat: f64, lon: f64) -> ApiResult<DistanceResult> {
        let fix = match self.validator.validate(lat, lon) {
            Ok(fix) => fix,
            Err(error) => {
                self.trigger_event(GameEvent::FixRejected {
                    reason: error.to_string(),
                });
                return Err(error.into());
            }
        };

        let old_state = self.session.state();
        let result = match self.session.process_fix(fix, &mut self.rng) {
            Ok(result) => result,
            Err(error) => {
                self.trigger_event(GameEvent::FixRejected {
                    reason: error.to_string(),
                });
                return Err(error.into());
            }
        };
        let new_state = self.session.state();

        if old_state == GameState::TargetPending {
            // process_fix only leaves TargetPending by placing a target
            if let Some(target) = self.session.target() {
                self.trigger_event(GameEvent::TargetGenerated { target });
            }
        }
        if new_state != old_state {
            self.trigger_event(GameEvent::StateChanged {
                old: old_state,
                new: new_state,
            });
        }

        debug!(
            lat = fix.lat,
            lon = fix.lon,
            distance_m = result.distance_m,
            "fix evaluated"
        );
        self.trigger_distance_callbacks(result);
        self.trigger_event(GameEvent::DistanceUpdated { result });

        if result.reached {
            info!(final_distance_m = result.distance_m, "target reached");
            self.trigger_event(GameEvent::GameWon {
                final_distance_m: result.distance_m,
            });
        }

        Ok(result)
    }

    /// Tear down every callback registration and reset the session
    pub fn shutdown(&mut self) {
        self.distance_callbacks.clear();
        self.event_callbacks.clear();
        self.session = GameSession::new();
        self.callback_counter = 0;
    }

    fn lifecycle_step<F>(&mut self, step: F) -> ApiResult<()>
    where
        F: FnOnce(&mut GameSession) -> Result<(), crate::session::SessionError>,
    {
        let old = self.session.state();
        step(&mut self.session)?;
        let new = self.session.state();
        if new != old {
            self.trigger_event(GameEvent::StateChanged { old, new });
        }
        Ok(())
    }

    fn trigger_distance_callbacks(&self, result: DistanceResult) {
        for callback in self.distance_callbacks.values() {
            callback(result);
        }
    }

    fn trigger_event(&self, event: GameEvent) {
        for callback in self.event_callbacks.values() {
            callback(event.clone());
        }
    }
}

impl Default for CallbackGameApi {
    fn default() -> Self {
        Self::new()
    }
}
