use clap::Parser;

use crate::models::constants::Dimension;
use crate::services::session::{OutOfRangePolicy, RingChoice};

/// Estimate where the other strongholds in a ring are from one you have found.
#[derive(Debug, Parser)]
#[command(name = "stronghold-rings")]
#[command(version)]
pub struct Args {
    /// x coordinate of the found stronghold's staircase (one-shot mode)
    #[arg(long, requires = "z", allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// z coordinate of the found stronghold's staircase (one-shot mode)
    #[arg(long, requires = "x", allow_negative_numbers = true)]
    pub z: Option<f64>,

    /// Use this ring (1-8) instead of detecting it
    #[arg(short, long, conflicts_with = "guess")]
    pub ring: Option<i32>,

    /// Use the ring with the nearest band instead of detecting it
    #[arg(short, long)]
    pub guess: bool,

    /// Show coordinates in nether units
    #[arg(short, long)]
    pub nether: bool,

    /// What to do when a stronghold lies in no ring
    #[arg(long, value_enum, default_value_t = OutOfRangePolicy::Ask)]
    pub on_out_of_range: OutOfRangePolicy,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn ring_choice(&self) -> RingChoice {
        match (self.ring, self.guess) {
            (Some(n), _) => RingChoice::Manual(n),
            (None, true) => RingChoice::Guess,
            (None, false) => RingChoice::Detect,
        }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_nether_flag(self.nether)
    }

    /// Coordinates for one-shot mode, if both were given.
    pub fn found(&self) -> Option<(f64, f64)> {
        self.x.zip(self.z)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
