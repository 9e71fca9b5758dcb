//! Stronghold ring calculator
//!
//! Takes the coordinates of one found stronghold, works out which ring it
//! belongs to, and projects where the rest of that ring's strongholds should be.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::constants::{FULL_CIRCLE, HALF_CIRCLE, STAIRCASE_OFFSET};
use crate::models::coords::{bearing, Coords};
use crate::models::errors::{CalcError, CalcResult};
use crate::models::ring::Ring;
use crate::services::projection::point_at;

/// A single calculation, built from one found stronghold.
///
/// Coordinates should be taken standing in the middle of the starter staircase.
#[derive(Debug, Clone)]
pub struct RingCalculator {
    /// Found position moved from the staircase to the chunk generation point.
    adjusted: Coords,
    ring: Option<Ring>,
}

impl RingCalculator {
    /// Creates a calculator for the stronghold found at (`x`, `z`).
    ///
    /// # Arguments
    ///
    /// * `x`, `z` - Block coordinates of the staircase
    /// * `relaxed` - When true, a position outside every ring leaves the ring
    ///   unassigned instead of failing
    ///
    /// # Errors
    ///
    /// `CalcError::OutOfRange` if the position is in no ring and `relaxed` is false.
    pub fn new(x: f64, z: f64, relaxed: bool) -> CalcResult<Self> {
        let distance = (x.powi(2) + z.powi(2)).sqrt().round();
        let ring = match Ring::classify(distance) {
            Ok(ring) => {
                debug!(distance, ring = ring.index, "classified stronghold");
                Some(ring)
            }
            Err(_) if relaxed => {
                warn!(distance, "stronghold outside every ring, awaiting manual ring");
                None
            }
            Err(err) => return Err(err),
        };

        Ok(RingCalculator {
            adjusted: Coords::new(x + STAIRCASE_OFFSET, z + STAIRCASE_OFFSET),
            ring,
        })
    }

    pub fn adjusted(&self) -> Coords {
        self.adjusted
    }

    pub fn ring(&self) -> Option<Ring> {
        self.ring
    }

    pub fn ring_index(&self) -> Option<i32> {
        self.ring.map(|r| r.index)
    }

    pub fn structure_count(&self) -> Option<i32> {
        self.ring.map(|r| r.structure_count)
    }

    /// Manually assigns ring `n` (1-8).
    pub fn set_ring(&mut self, n: i32) -> CalcResult<()> {
        let ring = Ring::by_index(n)?;
        debug!(ring = n, "ring set manually");
        self.ring = Some(ring);
        Ok(())
    }

    /// Assigns the ring whose band is nearest to the adjusted position and returns it.
    pub fn estimate_ring(&mut self) -> Ring {
        let distance = self.adjusted.distance_from_origin().round();
        let ring = Ring::estimate(distance);
        debug!(distance, ring = ring.index, "ring estimated");
        self.ring = Some(ring);
        ring
    }

    /// Bearing of the adjusted position in degrees, 0 being south.
    pub fn angle_from_origin(&self) -> f64 {
        bearing(self.adjusted.x(), self.adjusted.z())
    }

    /// Projects the other strongholds in the ring.
    ///
    /// Points are spread evenly around the circle at the ring's mean radius,
    /// starting from the found stronghold's own bearing. The found stronghold
    /// itself is not included. When `nether` is set every point is converted
    /// to nether units.
    pub fn project(&self, nether: bool) -> CalcResult<HashSet<Coords>> {
        let ring = self.ring.ok_or(CalcError::RingNotAssigned)?;
        let step = FULL_CIRCLE / ring.structure_count as f64;
        let radius = ring.mean_radius() as f64;
        let start = self.angle_from_origin();
        debug!(ring = ring.index, step, radius, start, "projecting ring");

        let siblings = ring.structure_count as usize - 1;
        let mut coords = HashSet::new();

        // Angles are start +/- k * step so float drift cannot carry a walk past the seam
        let mut forward = 0;
        for k in 1..=siblings {
            let angle = start + k as f64 * step;
            if angle >= HALF_CIRCLE {
                break;
            }
            coords.insert(Self::projected(angle, radius, nether)?);
            forward = k;
        }

        for k in 1..=siblings - forward {
            let angle = start - k as f64 * step;
            if angle <= -HALF_CIRCLE {
                break;
            }
            coords.insert(Self::projected(angle, radius, nether)?);
        }

        Ok(coords)
    }

    fn projected(angle: f64, radius: f64, nether: bool) -> CalcResult<Coords> {
        let mut c = point_at(angle, radius)?;
        if nether {
            c.scale_down();
        }
        Ok(c)
    }
}
