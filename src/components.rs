use specs::{
    prelude::*,
    Component
};

use crate::footprint::Footprint;

/// A tower that has been placed. Never changes after it is built.
#[derive(Clone, Debug, Component)]
pub struct PlacedStructure {
    pub footprint: Footprint,
    // Not used by placement yet.
    pub health: Option<u32>,
    pub build_time: Option<f32>,
}

impl PlacedStructure {
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            health: None,
            build_time: None,
        }
    }
}
