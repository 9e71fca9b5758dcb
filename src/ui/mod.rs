//! User interface and presentation
//!
//! Presenters that format calculation results for the terminal,
//! keeping layout out of the calculator and session logic.

pub mod presenters;
