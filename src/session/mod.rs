//! Game session state machine
//!
//! One `GameSession` value holds everything that changes over a round, so
//! the whole flow is testable without a platform location service. The
//! round's target is written exactly once, on the first fix processed
//! after the round starts, and stays immutable until `new_game` discards
//! it.

use crate::core::{Coordinate, DistanceResult};
use crate::engine::{DistanceEvaluator, TargetGenerator};
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Lifecycle states of a game round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game running
    Idle,
    /// Location permission requested, answer pending
    AwaitingPermission,
    /// Permission granted, waiting for the first fix to place the target
    TargetPending,
    /// Target placed; every fix is evaluated against it
    InProgress,
    /// Terminal for the round; only `new_game` leaves this state
    Won,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameState::Idle => "idle",
            GameState::AwaitingPermission => "awaiting permission",
            GameState::TargetPending => "target pending",
            GameState::InProgress => "in progress",
            GameState::Won => "finished",
        };
        write!(f, "{}", label)
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session misuse errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A fix arrived in a state that does not accept fixes
    NotAcceptingFixes { state: GameState },
    /// A lifecycle action was applied in the wrong state
    InvalidTransition {
        from: GameState,
        action: &'static str,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotAcceptingFixes { state } => {
                write!(f, "fix rejected: session is {}", state)
            }
            SessionError::InvalidTransition { from, action } => {
                write!(f, "cannot {} while session is {}", action, from)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A single game round and its lifecycle
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Current lifecycle state
    state: GameState,
    /// Target point for this round, set on the first processed fix
    target: Option<Coordinate>,
    /// Most recent evaluation, kept for status rendering
    last_result: Option<DistanceResult>,
    /// Fixes processed in this round
    fixes_processed: u32,
    /// Target placement
    generator: TargetGenerator,
    /// Distance computation
    evaluator: DistanceEvaluator,
}

impl GameSession {
    /// Create an idle session with no round running
    pub fn new() -> Self {
        Self {
            state: GameState::Idle,
            target: None,
            last_result: None,
            fixes_processed: 0,
            generator: TargetGenerator::new(),
            evaluator: DistanceEvaluator::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Target of the current round, if one has been placed
    pub fn target(&self) -> Option<Coordinate> {
        self.target
    }

    /// Most recent distance evaluation of the current round
    pub fn last_result(&self) -> Option<DistanceResult> {
        self.last_result
    }

    /// Fixes processed since the round started
    pub fn fixes_processed(&self) -> u32 {
        self.fixes_processed
    }

    /// Ask the platform collaborator for location permission
    pub fn request_permission(&mut self) -> SessionResult<()> {
        match self.state {
            GameState::Idle => {
                self.transition(GameState::AwaitingPermission);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "request permission",
            }),
        }
    }

    /// Record a granted permission and start waiting for the first fix
    pub fn permission_granted(&mut self) -> SessionResult<()> {
        match self.state {
            GameState::AwaitingPermission => {
                self.transition(GameState::TargetPending);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "grant permission",
            }),
        }
    }

    /// Record a denied permission and fall back to idle
    pub fn permission_denied(&mut self) -> SessionResult<()> {
        match self.state {
            GameState::AwaitingPermission => {
                self.transition(GameState::Idle);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "deny permission",
            }),
        }
    }

    /// Discard the current round and wait for a fresh first fix
    ///
    /// The only way out of `Won`. Requires permission to already be
    /// granted, i.e. any state at or past `TargetPending`.
    pub fn new_game(&mut self) -> SessionResult<()> {
        match self.state {
            GameState::TargetPending | GameState::InProgress | GameState::Won => {
                self.target = None;
                self.last_result = None;
                self.fixes_processed = 0;
                self.transition(GameState::TargetPending);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "start a new game",
            }),
        }
    }

    /// Feed one location fix through the round
    ///
    /// The first fix of a round places the target and is immediately
    /// evaluated against it; every later fix is evaluated against the
    /// stored target. A winning evaluation moves the round to `Won`.
    pub fn process_fix<R: Rng>(
        &mut self,
        fix: Coordinate,
        rng: &mut R,
    ) -> SessionResult<DistanceResult> {
        let target = match self.state {
            GameState::TargetPending => {
                let target = self.generator.generate_with(fix, rng);
                debug!(
                    target_lat = target.lat,
                    target_lon = target.lon,
                    "target placed from first fix"
                );
                self.target = Some(target);
                self.transition(GameState::InProgress);
                target
            }
            GameState::InProgress => match self.target {
                Some(target) => target,
                // InProgress without a target cannot be constructed through
                // the public API.
                None => return Err(SessionError::NotAcceptingFixes { state: self.state }),
            },
            state => return Err(SessionError::NotAcceptingFixes { state }),
        };

        let result = self.evaluator.evaluate(fix, target);
        self.last_result = Some(result);
        self.fixes_processed += 1;

        if result.reached {
            self.transition(GameState::Won);
        }
        Ok(result)
    }

    fn transition(&mut self, to: GameState) {
        debug!(from = %self.state, to = %to, "session transition");
        self.state = to;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TARGET_OFFSET_DEG;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn granted_session() -> GameSession {
        let mut session = GameSession::new();
        session.request_permission().unwrap();
        session.permission_granted().unwrap();
        session
    }

    #[test]
    fn test_permission_flow() {
        let mut session = GameSession::new();
        assert_eq!(session.state(), GameState::Idle);

        session.request_permission().unwrap();
        assert_eq!(session.state(), GameState::AwaitingPermission);

        session.permission_granted().unwrap();
        assert_eq!(session.state(), GameState::TargetPending);
    }

    #[test]
    fn test_denied_permission_returns_to_idle() {
        let mut session = GameSession::new();
        session.request_permission().unwrap();
        session.permission_denied().unwrap();
        assert_eq!(session.state(), GameState::Idle);

        // Without permission there is nothing to restart.
        assert!(session.new_game().is_err());
    }

    #[test]
    fn test_first_fix_places_target_and_evaluates() {
        let mut session = granted_session();
        let mut rng = StdRng::seed_from_u64(3);
        let origin = Coordinate::new(55.75, 37.61);

        let result = session.process_fix(origin, &mut rng).unwrap();
        assert_eq!(session.state(), GameState::InProgress);
        assert!(result.distance_m > 0.0);

        let target = session.target().unwrap();
        let dlat = target.lat - origin.lat;
        let dlon = target.lon - origin.lon;
        assert!(((dlat * dlat + dlon * dlon).sqrt() - TARGET_OFFSET_DEG).abs() < 1e-12);
    }

    #[test]
    fn test_target_is_written_once_per_round() {
        let mut session = granted_session();
        let mut rng = StdRng::seed_from_u64(11);

        session
            .process_fix(Coordinate::new(10.0, 20.0), &mut rng)
            .unwrap();
        let placed = session.target().unwrap();

        session
            .process_fix(Coordinate::new(10.001, 20.001), &mut rng)
            .unwrap();
        session
            .process_fix(Coordinate::new(10.002, 20.002), &mut rng)
            .unwrap();
        assert_eq!(session.target().unwrap(), placed);
    }

    #[test]
    fn test_walk_to_target_wins() {
        let mut session = granted_session();
        let mut rng = StdRng::seed_from_u64(5);

        let origin = Coordinate::new(0.0, 0.0);
        session.process_fix(origin, &mut rng).unwrap();
        let target = session.target().unwrap();

        // Step straight at the target.
        let result = session.process_fix(target, &mut rng).unwrap();
        assert!(result.reached);
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn test_won_round_rejects_fixes() {
        let mut session = granted_session();
        let mut rng = StdRng::seed_from_u64(5);

        session.process_fix(Coordinate::new(0.0, 0.0), &mut rng).unwrap();
        let target = session.target().unwrap();
        session.process_fix(target, &mut rng).unwrap();

        let err = session.process_fix(target, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SessionError::NotAcceptingFixes {
                state: GameState::Won
            }
        );
    }

    #[test]
    fn test_new_game_discards_target() {
        let mut session = granted_session();
        let mut rng = StdRng::seed_from_u64(17);

        session.process_fix(Coordinate::new(0.0, 0.0), &mut rng).unwrap();
        let target = session.target().unwrap();
        session.process_fix(target, &mut rng).unwrap();
        assert_eq!(session.state(), GameState::Won);

        session.new_game().unwrap();
        assert_eq!(session.state(), GameState::TargetPending);
        assert!(session.target().is_none());
        assert!(session.last_result().is_none());
        assert_eq!(session.fixes_processed(), 0);
    }

    #[test]
    fn test_fix_before_permission_is_rejected() {
        let mut session = GameSession::new();
        let mut rng = StdRng::seed_from_u64(1);

        let err = session
            .process_fix(Coordinate::new(0.0, 0.0), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::NotAcceptingFixes {
                state: GameState::Idle
            }
        );
    }
}
