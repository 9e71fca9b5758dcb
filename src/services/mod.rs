//! Calculator services
//!
//! The ring calculator and its projection table, the working set of
//! projected strongholds, and the interactive session built on them.

pub mod projection;
pub mod ring_calculator;
pub mod session;
pub mod stronghold_set;
