use crate::footprint::Footprint;
use crate::grid::GridCoord;

/// Pointer position in window pixels, sampled once per update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

/// A left click waiting to be turned into a tower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    pub x: f32,
    pub y: f32,
}

/// What the hover highlight should show this frame.
#[derive(Clone, Debug, Default)]
pub struct Preview {
    pub footprint: Option<Footprint>,
    pub overlapping: Vec<GridCoord>,
    pub free: Vec<GridCoord>,
}

impl Preview {
    pub fn is_placeable(&self) -> bool {
        self.footprint.is_some() && self.overlapping.is_empty()
    }
}
