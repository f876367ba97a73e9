use log::{debug, info};
use specs::prelude::*;

use crate::components::*;
use crate::config::Config;
use crate::footprint::Footprint;
use crate::grid::GridCoord;
use crate::occupancy::{OccupancySet, PlacementOutcome};
use crate::resources::*;

/// Turns queued clicks into towers, oldest first. A click whose footprint touches any occupied
/// cell is dropped without changing anything.
pub struct PlacementSystem;

impl<'a> System<'a> for PlacementSystem {
    type SystemData = (
        ReadExpect<'a, Config>,
        Entities<'a>,
        Write<'a, Vec<PlacementRequest>>,
        Write<'a, OccupancySet>,
        WriteStorage<'a, PlacedStructure>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (config, entities, mut requests, mut occupancy, mut structures) = data;

        for request in requests.drain(..) {
            let center = GridCoord::from_pixel(request.x, request.y);
            let footprint = Footprint::new(center, config.tower_size);

            match occupancy.commit(&footprint) {
                PlacementOutcome::Placed => {
                    entities.build_entity()
                        .with(PlacedStructure::new(footprint), &mut structures)
                        .build();
                    info!("Built tower at {:?} ({} cells occupied)", center, occupancy.len());
                }
                PlacementOutcome::Blocked { overlapping } => {
                    debug!("Can't build at {:?}, {} cells taken", center, overlapping.len());
                }
            }
        }
    }
}

/// Recomputes the hover highlight for the footprint under the cursor.
pub struct PreviewSystem;

impl<'a> System<'a> for PreviewSystem {
    type SystemData = (
        ReadExpect<'a, Config>,
        Read<'a, Cursor>,
        Read<'a, OccupancySet>,
        Write<'a, Preview>,
    );

    fn run(&mut self, data: Self::SystemData) {
        let (config, cursor, occupancy, mut preview) = data;

        let footprint = Footprint::new(GridCoord::from_pixel(cursor.x, cursor.y), config.tower_size);
        let (overlapping, free) = footprint.partition(&occupancy);
        *preview = Preview {
            footprint: Some(footprint),
            overlapping,
            free,
        };
    }
}
