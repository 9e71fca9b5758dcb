use std::fmt;
use std::hash::{Hash, Hasher};

use super::constants::{Dimension, HALF_CIRCLE, NETHER_SCALE, RIGHT_ANGLE};
use super::errors::{CalcError, CalcResult};

/// Which quadrant of the world a coordinate lies in.
/// Zero counts as positive on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    PosPos,
    PosNeg,
    NegPos,
    NegNeg,
}

impl Quadrant {
    pub fn of(x: f64, z: f64) -> Quadrant {
        if x < 0.0 && z < 0.0 {
            Quadrant::NegNeg
        } else if x >= 0.0 && z >= 0.0 {
            Quadrant::PosPos
        } else if x >= 0.0 {
            Quadrant::PosNeg
        } else {
            Quadrant::NegPos
        }
    }

    /// Sign pair of (x, z), e.g. `+-`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Quadrant::PosPos => "++",
            Quadrant::PosNeg => "+-",
            Quadrant::NegPos => "-+",
            Quadrant::NegNeg => "--",
        }
    }

    /// Compass heading of the quadrant (+x is east, +z is south).
    pub fn heading(&self) -> &'static str {
        match self {
            Quadrant::PosPos => "SOUTH-EAST",
            Quadrant::PosNeg => "NORTH-EAST",
            Quadrant::NegPos => "SOUTH-WEST",
            Quadrant::NegNeg => "NORTH-WEST",
        }
    }

    pub const ALL: [Quadrant; 4] = [
        Quadrant::PosPos,
        Quadrant::PosNeg,
        Quadrant::NegPos,
        Quadrant::NegNeg,
    ];
}

/// A horizontal block position. The height axis is irrelevant here and omitted.
///
/// +z points south and +x points east. Equality and hashing go through the
/// truncated integer form, so two coordinates that display the same are
/// the same entry in a set.
#[derive(Debug, Clone, Copy)]
pub struct Coords {
    x: f64,
    z: f64,
    quadrant: Quadrant,
}

impl Coords {
    pub fn new(x: f64, z: f64) -> Self {
        Coords {
            x,
            z,
            quadrant: Quadrant::of(x, z),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Overworld to nether units.
    pub fn scale_down(&mut self) {
        self.x /= NETHER_SCALE;
        self.z /= NETHER_SCALE;
        self.quadrant = Quadrant::of(self.x, self.z);
    }

    /// Nether to overworld units.
    pub fn scale_up(&mut self) {
        self.x *= NETHER_SCALE;
        self.z *= NETHER_SCALE;
        self.quadrant = Quadrant::of(self.x, self.z);
    }

    /// Returns a copy converted from one unit system into another.
    pub fn to_dimension(mut self, from: Dimension, to: Dimension) -> Coords {
        match (from, to) {
            (Dimension::Overworld, Dimension::Nether) => self.scale_down(),
            (Dimension::Nether, Dimension::Overworld) => self.scale_up(),
            _ => {}
        }
        self
    }

    /// Integer form of the coordinate, truncated toward zero.
    pub fn block(&self) -> (i64, i64) {
        (self.x.trunc() as i64, self.z.trunc() as i64)
    }

    pub fn display_form(&self) -> String {
        self.to_string()
    }

    /// Straight-line distance from the origin.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn bearing(&self) -> f64 {
        bearing(self.x, self.z)
    }

    /// Parses `(x, z)`, `x, z` or `x z`.
    pub fn parse(text: &str) -> CalcResult<Coords> {
        let trimmed = text
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        match parts.as_slice() {
            [x, z] => Ok(Coords::new(x.parse()?, z.parse()?)),
            _ => Err(CalcError::ParseError(format!(
                "expected two numbers, got {:?}",
                text.trim()
            ))),
        }
    }
}

/// Signed bearing of (x, z) from the origin in degrees.
///
/// 0 is south (+z), -90 is east, 90 is west and +/-180 is north.
/// The origin itself and the negative z axis report -180.
pub fn bearing(x: f64, z: f64) -> f64 {
    let mut angle = if z > 0.0 {
        (x / z).atan().to_degrees().abs()
    } else if x != 0.0 {
        (z / x).atan().to_degrees().abs() + RIGHT_ANGLE
    } else {
        -HALF_CIRCLE
    };
    // positive x is a negative bearing
    if x > 0.0 {
        angle = -angle;
    }
    angle
}

impl PartialEq for Coords {
    fn eq(&self, other: &Self) -> bool {
        self.block() == other.block()
    }
}

impl Eq for Coords {}

impl Hash for Coords {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.block().hash(state);
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, z) = self.block();
        write!(f, "({}, {})", x, z)
    }
}
