use ggez::*;
use ggez::input::{
    keyboard::{KeyCode, KeyMods},
    mouse::MouseButton,
};
use log::info;
use specs::prelude::*;

use tower_placement::components::*;
use tower_placement::config::Config;
use tower_placement::grid::{GridCoord, CELL_SIZE};
use tower_placement::resources::*;
use tower_placement::session::Session;

const BACKGROUND: (u8, u8, u8) = (255, 255, 255);
const TOWER: (u8, u8, u8) = (25, 25, 255);
const BLOCKED: (u8, u8, u8) = (255, 50, 50);
const FREE: (u8, u8, u8) = (50, 255, 50);

struct State<'a, 'b> {
    session: Session<'a, 'b>,
    frame_rate: u32,
}

impl<'a, 'b> ggez::event::EventHandler for State<'a, 'b> {
    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.session.request_placement(x, y);
        }
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if repeat {
            return;
        }

        if keycode == KeyCode::Escape {
            event::quit(ctx);
        }
    }

    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        while timer::check_update_time(ctx, self.frame_rate) {
            let mouse_pos = input::mouse::position(ctx);
            self.session.set_cursor(mouse_pos.x, mouse_pos.y);
            self.session.update();
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, BACKGROUND.into());

        let world = self.session.world();
        let system_data: (
            ReadStorage<PlacedStructure>,
            Read<Preview>,
        ) = world.system_data();
        let (structures, preview) = system_data;

        let towers = structures.join().flat_map(|structure| structure.footprint.cells());
        draw_cells(ctx, towers, TOWER.into())?;

        draw_cells(ctx, preview.overlapping.iter().cloned(), BLOCKED.into())?;
        draw_cells(ctx, preview.free.iter().cloned(), FREE.into())?;

        let tower_count = structures.join().count();
        let tower_size = world.read_resource::<Config>().tower_size;
        graphics::draw(
            ctx,
            &graphics::Text::new(format!("Towers: {}  Size: {}x{}", tower_count, tower_size, tower_size)),
            graphics::DrawParam::default()
                .dest([10.0, 10.0])
                .color(graphics::BLACK),
        )?;

        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }
}

/// Fills each cell with `color` in a single mesh.
fn draw_cells<I>(ctx: &mut Context, cells: I, color: graphics::Color) -> GameResult<()>
    where I: IntoIterator<Item = GridCoord>
{
    let mut mb = graphics::MeshBuilder::new();
    let mut empty = true;
    for cell in cells {
        mb.rectangle(graphics::DrawMode::fill(), cell.to_pixel_rect(CELL_SIZE).into(), color);
        empty = false;
    }

    // Building a mesh with no vertices fails.
    if !empty {
        let mesh = mb.build(ctx)?;
        graphics::draw(ctx, &mesh, graphics::DrawParam::default())?;
    }

    Ok(())
}

fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default().validate()
        .map_err(|err| GameError::ConfigError(err.to_string()))?;
    info!("Starting with {:?}", config);

    let (mut ctx, mut event_loop) = ContextBuilder::new("tower_placement", "studio_giblets")
        .window_setup(conf::WindowSetup::default().title("Tower Placement"))
        .window_mode(conf::WindowMode::default().dimensions(config.window_width, config.window_height))
        .build()?;
    let mut state = State {
        frame_rate: config.frame_rate,
        session: Session::new(config),
    };
    event::run(&mut ctx, &mut event_loop, &mut state)
}
