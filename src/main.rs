//! Simulated-walk demonstration
//!
//! Drives the game engine without a real GPS: a synthetic player starts a
//! round, and each simulated fix steps a fixed fraction of the remaining
//! way toward the generated target until the win fires. Output is the
//! same formatted text a UI collaborator would display.

use geowalk::{
    CallbackGameApi, Coordinate, DistanceEvaluator, EngineConfig, GameEvent, UpdateFormatter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fraction of the remaining distance covered per simulated fix
const STEP_FRACTION: f64 = 0.25;

/// Simulated starting position (Moscow city center)
const START: Coordinate = Coordinate {
    lat: 55.7558,
    lon: 37.6173,
};

fn main() {
    let config = EngineConfig::default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let formatter = UpdateFormatter::new().with_precision(config.display_precision);
    let mut api = CallbackGameApi::new();

    api.register_event_callback(Box::new(|event| match event {
        GameEvent::TargetGenerated { target } => {
            println!("Target placed at ({:.5}, {:.5})", target.lat, target.lon);
        }
        GameEvent::StateChanged { old, new } => {
            tracing::info!(%old, %new, "state changed");
        }
        GameEvent::GameWon { final_distance_m } => {
            println!("*** You won at {:.1} m from the target ***", final_distance_m);
        }
        _ => {}
    }));

    tracing::info!(
        min_interval_ms = api.subscription_settings().min_interval_ms,
        min_displacement_deg = api.subscription_settings().min_displacement_deg,
        "collaborator would request fixes at this cadence"
    );

    api.start_game().expect("fresh session accepts start_game");
    api.grant_permission()
        .expect("simulated permission is always granted");

    // First fix places the target.
    let mut position = START;
    api.submit_fix(position.lat, position.lon)
        .expect("first fix is valid");
    let target = api.target().expect("target exists after the first fix");

    let evaluator = DistanceEvaluator::new();
    for step in 1..=64 {
        position = step_toward(position, target);
        let result = api
            .submit_fix(position.lat, position.lon)
            .expect("simulated fixes are valid");

        println!("fix {:>2}: {}", step, formatter.distance_line(result));
        if result.reached {
            let update = formatter.format(api.state(), api.last_result());
            println!(
                "final status: {}",
                formatter.to_json(&update).expect("update serializes")
            );
            return;
        }

        // Sanity trace while walking in.
        tracing::debug!(
            remaining_m = evaluator.distance_m(position, target),
            "simulated step"
        );
    }

    eprintln!("simulation did not converge, which should be impossible");
}

/// Move a fixed fraction of the remaining offset toward the target
fn step_toward(from: Coordinate, target: Coordinate) -> Coordinate {
    Coordinate {
        lat: from.lat + (target.lat - from.lat) * STEP_FRACTION,
        lon: from.lon + (target.lon - from.lon) * STEP_FRACTION,
    }
}
