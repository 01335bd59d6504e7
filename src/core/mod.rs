//! Core types and constants for the geo-walk game engine

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
