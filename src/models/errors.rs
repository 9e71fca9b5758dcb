use thiserror::Error;

/// Calculator error types
#[derive(Debug, Error)]
pub enum CalcError {
    /// Distance from origin falls inside no ring band
    #[error("coordinates not in a stronghold ring (distance {distance})")]
    OutOfRange { distance: f64 },
    /// Ring index outside 1..=8
    #[error("invalid ring number {0}, must be 1-8")]
    InvalidRing(i32),
    /// A projected angle left [-180, 180]
    #[error("invalid angle {0}, must be between -180 and 180")]
    InvalidAngle(f64),
    /// Trig selector was neither sine nor cosine
    #[error("illegal trig selector {0:?}, must be sine or cosine")]
    InvalidTrigSelector(String),
    /// Projection requested before a ring was assigned
    #[error("no ring assigned, set one manually or estimate it first")]
    RingNotAssigned,
    /// Failed to parse user input
    #[error("parse error: {0}")]
    ParseError(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Results using CalcError
pub type CalcResult<T> = Result<T, CalcError>;

impl From<std::num::ParseFloatError> for CalcError {
    fn from(err: std::num::ParseFloatError) -> Self {
        CalcError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for CalcError {
    fn from(err: std::num::ParseIntError) -> Self {
        CalcError::ParseError(err.to_string())
    }
}
