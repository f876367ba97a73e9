use crate::grid::GridCoord;
use crate::occupancy::OccupancySet;

/// The n x n block of cells a tower covers when centered on `center`.
///
/// For even sizes there is no middle cell, so the block is shifted up and to the left by one. The
/// cursor hides the bottom-right of the highlight, and this keeps more of it visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub center: GridCoord,
    pub size: u32,
}

impl Footprint {
    pub fn new(center: GridCoord, size: u32) -> Self {
        Self { center, size }
    }

    /// Offsets from the center covered on each axis, as a half-open range.
    fn bounds(&self) -> (i32, i32) {
        let size = self.size as i32;
        let lower = -(size / 2);
        (lower, size + lower)
    }

    /// Every cell in the block, column by column.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let (lower, upper) = self.bounds();
        let center = self.center;
        (lower..upper).flat_map(move |dx| (lower..upper).map(move |dy| center.offset(dx, dy)))
    }

    pub fn is_placeable(&self, occupancy: &OccupancySet) -> bool {
        !self.cells().any(|cell| occupancy.contains(cell))
    }

    pub fn overlapping_cells(&self, occupancy: &OccupancySet) -> Vec<GridCoord> {
        self.cells().filter(|&cell| occupancy.contains(cell)).collect()
    }

    pub fn free_cells(&self, occupancy: &OccupancySet) -> Vec<GridCoord> {
        self.cells().filter(|&cell| !occupancy.contains(cell)).collect()
    }

    /// Splits the cells into (overlapping, free) in one pass. Both keep `cells()` order.
    pub fn partition(&self, occupancy: &OccupancySet) -> (Vec<GridCoord>, Vec<GridCoord>) {
        self.cells().partition(|&cell| occupancy.contains(cell))
    }
}
