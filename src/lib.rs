//! Stronghold Ring Calculator
//!
//! Estimates where the undiscovered strongholds of a world are, given the
//! coordinates of one that has already been found.
//!
//! # Overview
//!
//! Strongholds generate in 8 concentric rings around the origin, each ring
//! holding a fixed number of strongholds spaced evenly by angle. From one
//! found stronghold the calculator picks its ring, measures its bearing from
//! the origin, and projects the positions of the others at the ring's mean
//! radius, in overworld or nether coordinates.
//!
//! # Modules
//!
//! - [`models`] - Coordinates, the ring catalog, constants and errors
//! - [`services`] - Ring calculator, projection, result set and session
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of results
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use stronghold_rings::RingCalculator;
//!
//! let calc = RingCalculator::new(0.0, 1280.0, false).unwrap();
//! assert_eq!(calc.ring_index(), Some(1));
//! assert_eq!(calc.project(false).unwrap().len(), 2);
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::constants::Dimension;
pub use models::coords::{Coords, Quadrant};
pub use models::errors::{CalcError, CalcResult};
pub use models::ring::Ring;
pub use services::ring_calculator::RingCalculator;
pub use services::stronghold_set::{partition_by_quadrant, StrongholdSet};
