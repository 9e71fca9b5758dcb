pub const RING_COUNT: usize = 8;

/// Offset between a stronghold's entry staircase (4,4 within its chunk)
/// and the chunk corner it actually generates from.
pub const STAIRCASE_OFFSET: f64 = 4.0;

/// Overworld blocks per nether block.
pub const NETHER_SCALE: f64 = 8.0;

pub const FULL_CIRCLE: f64 = 360.0;
pub const HALF_CIRCLE: f64 = 180.0;
pub const RIGHT_ANGLE: f64 = 90.0;

/// Unit system a set of coordinates is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    #[default]
    Overworld,
    Nether,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Overworld => "OVERWORLD",
            Dimension::Nether => "NETHER",
        }
    }

    pub fn toggled(&self) -> Dimension {
        match self {
            Dimension::Overworld => Dimension::Nether,
            Dimension::Nether => Dimension::Overworld,
        }
    }

    pub fn from_nether_flag(nether: bool) -> Dimension {
        if nether {
            Dimension::Nether
        } else {
            Dimension::Overworld
        }
    }
}
