//! This module contains all the constants used by the map toolkit.

use glam::UVec2;

/// The default size of a generated map, in cells.
pub const MAP_SIZE: UVec2 = UVec2::new(60, 60);

/// The default fraction of cells that become walls in a random map.
pub const DEFAULT_WALL_DENSITY: f32 = 0.12;
/// The default fraction of cells that become bushes in a random map.
pub const DEFAULT_BUSH_DENSITY: f32 = 0.18;

/// How far each team's spawn sits from its own edge of the map, in cells.
pub const SPAWN_INSET: u32 = 2;
