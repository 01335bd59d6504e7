//! Input validation for the API boundary

pub mod data;

pub use data::{CoordinateValidator, ValidationError};
