//! Rendering of distance updates for display
//!
//! Produces the strings a UI collaborator shows directly: a status label
//! for the round, the live distance line, and a JSON form for
//! machine-readable consumers.

use crate::core::DistanceResult;
use crate::session::GameState;
use serde::{Deserialize, Serialize};

/// One displayable snapshot of the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedUpdate {
    /// Round status label ("in progress", "finished", ...)
    pub status: String,
    /// Distance to the target (meters), absent before the first fix
    pub distance_m: Option<f64>,
    /// Whether the target has been reached
    pub reached: bool,
}

/// Formats game state and distance results for display
#[derive(Debug, Clone, Copy)]
pub struct UpdateFormatter {
    /// Decimal places for distance values
    pub precision: usize,
}

impl Default for UpdateFormatter {
    fn default() -> Self {
        Self { precision: 1 }
    }
}

impl UpdateFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal precision for distance values
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Build a displayable snapshot from the session's state and last result
    pub fn format(&self, state: GameState, result: Option<DistanceResult>) -> FormattedUpdate {
        FormattedUpdate {
            status: state.to_string(),
            distance_m: result.map(|r| round_to(r.distance_m, self.precision)),
            reached: result.map(|r| r.reached).unwrap_or(false),
        }
    }

    /// Render the distance line a UI shows under the status label
    pub fn distance_line(&self, result: DistanceResult) -> String {
        if result.reached {
            format!(
                "You made it! Final distance: {:.prec$} m",
                result.distance_m,
                prec = self.precision
            )
        } else {
            format!(
                "Distance to target: {:.prec$} m",
                result.distance_m,
                prec = self.precision
            )
        }
    }

    /// Render a snapshot as JSON
    pub fn to_json(&self, update: &FormattedUpdate) -> serde_json::Result<String> {
        serde_json::to_string(update)
    }
}

fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_line_in_progress() {
        let formatter = UpdateFormatter::new();
        let line = formatter.distance_line(DistanceResult::from_distance(1234.56));
        assert_eq!(line, "Distance to target: 1234.6 m");
    }

    #[test]
    fn test_distance_line_on_win() {
        let formatter = UpdateFormatter::new().with_precision(0);
        let line = formatter.distance_line(DistanceResult::from_distance(42.0));
        assert_eq!(line, "You made it! Final distance: 42 m");
    }

    #[test]
    fn test_format_before_first_fix() {
        let formatter = UpdateFormatter::new();
        let update = formatter.format(GameState::TargetPending, None);
        assert_eq!(update.status, "target pending");
        assert!(update.distance_m.is_none());
        assert!(!update.reached);
    }

    #[test]
    fn test_json_round_trip() {
        let formatter = UpdateFormatter::new();
        let update = formatter.format(
            GameState::InProgress,
            Some(DistanceResult::from_distance(250.25)),
        );

        let json = formatter.to_json(&update).unwrap();
        let parsed: FormattedUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, update);
        assert_eq!(parsed.distance_m, Some(250.3));
        assert_eq!(parsed.status, "in progress");
    }
}
