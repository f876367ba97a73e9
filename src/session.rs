use specs::prelude::*;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;
use crate::systems::*;

/// Everything that lives for one run of the sandbox: the towers, the occupied cells and the
/// systems that update them.
pub struct Session<'a, 'b> {
    world: World,
    dispatcher: Dispatcher<'a, 'b>,
}

impl<'a, 'b> Session<'a, 'b> {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        world.register::<PlacedStructure>();
        world.insert(config);

        // Placement has to land before the preview is computed, and both run on this thread.
        let mut dispatcher = DispatcherBuilder::new()
            .with_thread_local(PlacementSystem)
            .with_thread_local(PreviewSystem)
            .build();

        dispatcher.setup(&mut world);

        Self {
            world,
            dispatcher,
        }
    }

    /// Queues a click. It is resolved on the next `update`.
    pub fn request_placement(&mut self, x: f32, y: f32) {
        self.world.write_resource::<Vec<PlacementRequest>>().push(PlacementRequest { x, y });
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.world.insert(Cursor { x, y });
    }

    pub fn update(&mut self) {
        self.dispatcher.dispatch(&self.world);
        self.world.maintain();
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
