//! Click-to-place square towers on a grid of 20 px cells. The highlight under the cursor shows
//! which cells of the next tower are free and which are already taken.

pub mod components;
pub mod config;
pub mod footprint;
pub mod grid;
pub mod occupancy;
pub mod rect;
pub mod resources;
pub mod session;
pub mod systems;
