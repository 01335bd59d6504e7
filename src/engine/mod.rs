//! Distance engine: target generation and win-condition evaluation

pub mod distance;
pub mod target;

pub use distance::DistanceEvaluator;
pub use target::TargetGenerator;
