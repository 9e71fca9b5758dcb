//! Stronghold ring catalog
//!
//! Strongholds generate in 8 concentric bands around the origin. Each band
//! holds a fixed number of strongholds spaced evenly by angle.

use super::constants::RING_COUNT;
use super::errors::{CalcError, CalcResult};

/// One band of the catalog. Radii are inclusive block distances from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub index: i32,
    pub min_radius: i32,
    pub max_radius: i32,
    pub structure_count: i32,
}

const fn ring(index: i32, min_radius: i32, max_radius: i32, structure_count: i32) -> Ring {
    Ring {
        index,
        min_radius,
        max_radius,
        structure_count,
    }
}

impl Ring {
    /// The catalog in ring order.
    pub const ALL: [Ring; RING_COUNT] = [
        ring(1, 1280, 2816, 3),
        ring(2, 4352, 5888, 6),
        ring(3, 7424, 8960, 10),
        ring(4, 10496, 12032, 15),
        ring(5, 13568, 15104, 21),
        ring(6, 16640, 18176, 28),
        ring(7, 19712, 21248, 36),
        ring(8, 22784, 24320, 9),
    ];

    /// Middle of the band, the radius projections are placed at.
    pub fn mean_radius(&self) -> i32 {
        (self.min_radius + self.max_radius) / 2
    }

    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min_radius as f64 && distance <= self.max_radius as f64
    }

    /// The ring whose band contains `distance`.
    pub fn classify(distance: f64) -> CalcResult<Ring> {
        Ring::ALL
            .iter()
            .find(|r| r.contains(distance))
            .copied()
            .ok_or(CalcError::OutOfRange { distance })
    }

    /// Best guess for a distance that may sit outside every band.
    ///
    /// Below ring 1 gives ring 1 and beyond ring 8 gives ring 8. In the gap
    /// between two bands the ring with the nearer edge wins, and an exact
    /// midpoint goes to the lower ring.
    pub fn estimate(distance: f64) -> Ring {
        if let Ok(ring) = Ring::classify(distance) {
            return ring;
        }
        let first = Ring::ALL[0];
        if distance < first.min_radius as f64 {
            return first;
        }
        for pair in Ring::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if distance > lower.max_radius as f64 && distance < upper.min_radius as f64 {
                let to_lower = distance - lower.max_radius as f64;
                let to_upper = upper.min_radius as f64 - distance;
                return if to_lower <= to_upper { lower } else { upper };
            }
        }
        Ring::ALL[RING_COUNT - 1]
    }

    /// Ring by its 1-based number.
    pub fn by_index(n: i32) -> CalcResult<Ring> {
        if !(1..=RING_COUNT as i32).contains(&n) {
            return Err(CalcError::InvalidRing(n));
        }
        Ok(Ring::ALL[(n - 1) as usize])
    }
}
