//! Working set of projected strongholds
//!
//! Holds the projected positions the player still has to visit, in whichever
//! unit system they are currently displayed in.

use std::collections::HashSet;

use tracing::info;

use crate::models::constants::Dimension;
use crate::models::coords::{Coords, Quadrant};
use crate::models::errors::CalcResult;

/// Projected strongholds, one per display form.
#[derive(Debug, Clone, Default)]
pub struct StrongholdSet {
    coords: HashSet<Coords>,
    dimension: Dimension,
}

impl StrongholdSet {
    /// Wraps a projection already expressed in `dimension` units.
    pub fn new(coords: HashSet<Coords>, dimension: Dimension) -> Self {
        StrongholdSet { coords, dimension }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn remaining(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn contains(&self, c: &Coords) -> bool {
        self.coords.contains(c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coords> {
        self.coords.iter()
    }

    /// Marks a stronghold as visited. Returns false if it was not in the set.
    pub fn remove(&mut self, c: &Coords) -> bool {
        let removed = self.coords.remove(c);
        if removed {
            info!(coords = %c, remaining = self.coords.len(), "stronghold removed");
        }
        removed
    }

    /// Removes the entry displayed as `text`, e.g. `(1024, -1774)`.
    pub fn remove_display(&mut self, text: &str) -> CalcResult<bool> {
        let c = Coords::parse(text)?;
        Ok(self.remove(&c))
    }

    /// Converts every held entry into `dimension` units.
    ///
    /// Entries that truncate to the same block after conversion merge.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        if dimension == self.dimension {
            return;
        }
        let from = self.dimension;
        self.coords = self
            .coords
            .drain()
            .map(|c| c.to_dimension(from, dimension))
            .collect();
        self.dimension = dimension;
        info!(
            dimension = dimension.label(),
            remaining = self.coords.len(),
            "converted strongholds"
        );
    }

    pub fn toggle_dimension(&mut self) {
        self.set_dimension(self.dimension.toggled());
    }

    /// Entries in ascending bearing order.
    pub fn sorted(&self) -> Vec<Coords> {
        let mut sorted: Vec<Coords> = self.coords.iter().copied().collect();
        sorted.sort_by(|a, b| a.bearing().total_cmp(&b.bearing()));
        sorted
    }

    /// Entries grouped by quadrant, each group in ascending bearing order.
    pub fn by_quadrant(&self) -> [Vec<Coords>; 4] {
        partition_by_quadrant(&self.sorted())
    }
}

/// Buckets coordinates by quadrant, in [`Quadrant::ALL`] order.
/// Order within each bucket follows the input.
pub fn partition_by_quadrant<'a, I>(coords: I) -> [Vec<Coords>; 4]
where
    I: IntoIterator<Item = &'a Coords>,
{
    let mut columns: [Vec<Coords>; 4] = Default::default();
    for c in coords {
        let slot = Quadrant::ALL
            .iter()
            .position(|q| *q == c.quadrant())
            .unwrap_or_default();
        columns[slot].push(*c);
    }
    columns
}
