//! Angle to position projection
//!
//! Turns a bearing and a radius into a block position. Axis-aligned bearings
//! map straight onto an axis; every other bearing falls in one of four open
//! 90 degree sectors, each described by a row of [`SECTORS`].

use std::str::FromStr;

use crate::models::constants::{HALF_CIRCLE, RIGHT_ANGLE};
use crate::models::coords::Coords;
use crate::models::errors::{CalcError, CalcResult};

/// Trig function used to size one axis of a projected point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sine,
    Cosine,
}

impl Trig {
    /// `|f(angle)| * hypotenuse`, rounded to the nearest block.
    pub fn magnitude(self, degrees: f64, hypotenuse: f64) -> f64 {
        let radians = degrees.to_radians();
        let ratio = match self {
            Trig::Sine => radians.sin(),
            Trig::Cosine => radians.cos(),
        };
        (ratio.abs() * hypotenuse).round()
    }
}

impl FromStr for Trig {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(Trig::Sine),
            "cosine" | "cos" => Ok(Trig::Cosine),
            other => Err(CalcError::InvalidTrigSelector(other.to_string())),
        }
    }
}

/// Unit direction for the bearings that land exactly on an axis.
pub const AXES: [(f64, (f64, f64)); 5] = [
    (0.0, (0.0, 1.0)),
    (RIGHT_ANGLE, (-1.0, 0.0)),
    (-RIGHT_ANGLE, (1.0, 0.0)),
    (HALF_CIRCLE, (0.0, -1.0)),
    (-HALF_CIRCLE, (0.0, -1.0)),
];

/// One open sector of bearings, `lower < angle < upper`.
#[derive(Debug, Clone, Copy)]
pub struct Sector {
    pub lower: f64,
    pub upper: f64,
    /// Maps the bearing to the angle the trig functions are evaluated at.
    pub reference: fn(f64) -> f64,
    /// When set, x takes the cosine and z the sine.
    pub swap: bool,
    pub sign_x: f64,
    pub sign_z: f64,
}

impl Sector {
    pub fn contains(&self, angle: f64) -> bool {
        angle > self.lower && angle < self.upper
    }

    pub fn trig_for_x(&self) -> Trig {
        if self.swap {
            Trig::Cosine
        } else {
            Trig::Sine
        }
    }

    pub fn trig_for_z(&self) -> Trig {
        if self.swap {
            Trig::Sine
        } else {
            Trig::Cosine
        }
    }

    fn project(&self, angle: f64, radius: f64) -> Coords {
        let reference = (self.reference)(angle);
        Coords::new(
            self.sign_x * self.trig_for_x().magnitude(reference, radius),
            self.sign_z * self.trig_for_z().magnitude(reference, radius),
        )
    }
}

fn same(angle: f64) -> f64 {
    angle
}

fn from_west(angle: f64) -> f64 {
    RIGHT_ANGLE - angle
}

fn mirrored(angle: f64) -> f64 {
    -angle
}

fn from_east(angle: f64) -> f64 {
    RIGHT_ANGLE + angle
}

pub const SECTORS: [Sector; 4] = [
    // south to west
    Sector {
        lower: 0.0,
        upper: RIGHT_ANGLE,
        reference: same,
        swap: false,
        sign_x: -1.0,
        sign_z: 1.0,
    },
    // west to north
    Sector {
        lower: RIGHT_ANGLE,
        upper: HALF_CIRCLE,
        reference: from_west,
        swap: true,
        sign_x: -1.0,
        sign_z: -1.0,
    },
    // east to south
    Sector {
        lower: -RIGHT_ANGLE,
        upper: 0.0,
        reference: mirrored,
        swap: false,
        sign_x: 1.0,
        sign_z: 1.0,
    },
    // north to east
    Sector {
        lower: -HALF_CIRCLE,
        upper: -RIGHT_ANGLE,
        reference: from_east,
        swap: true,
        sign_x: 1.0,
        sign_z: -1.0,
    },
];

/// Block position at `angle` degrees and `radius` blocks from the origin.
pub fn point_at(angle: f64, radius: f64) -> CalcResult<Coords> {
    if !(-HALF_CIRCLE..=HALF_CIRCLE).contains(&angle) {
        return Err(CalcError::InvalidAngle(angle));
    }
    if let Some((_, (ux, uz))) = AXES.iter().find(|(a, _)| *a == angle) {
        return Ok(Coords::new(ux * radius, uz * radius));
    }
    SECTORS
        .iter()
        .find(|s| s.contains(angle))
        .map(|s| s.project(angle, radius))
        .ok_or(CalcError::InvalidAngle(angle))
}
