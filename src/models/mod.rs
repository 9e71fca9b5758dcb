//! Domain models
//!
//! Value types for the calculator: coordinates, the ring catalog,
//! shared constants and the crate error type. Models are pure data
//! with minimal logic.

pub mod constants;
pub mod coords;
pub mod errors;
pub mod ring;
