use std::collections::HashSet;

use crate::footprint::Footprint;
use crate::grid::GridCoord;

/// Every cell currently taken by a placed tower. This is the only record of what is occupied.
#[derive(Clone, Debug, Default)]
pub struct OccupancySet {
    cells: HashSet<GridCoord>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed,
    /// Nothing was committed. Holds the cells that were already taken.
    Blocked { overlapping: Vec<GridCoord> },
}

impl OccupancySet {
    pub fn contains(&self, cell: GridCoord) -> bool {
        self.cells.contains(&cell)
    }

    pub fn insert_all<I>(&mut self, cells: I)
        where I: IntoIterator<Item = GridCoord>
    {
        self.cells.extend(cells);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Claims every cell of the footprint, or none of them if any is already taken.
    pub fn commit(&mut self, footprint: &Footprint) -> PlacementOutcome {
        if footprint.is_placeable(self) {
            self.insert_all(footprint.cells());
            PlacementOutcome::Placed
        } else {
            PlacementOutcome::Blocked { overlapping: footprint.overlapping_cells(self) }
        }
    }
}
