//! An in-memory tile grid, usable as a build sink and as a map representation
//! in its own right.

use std::collections::HashMap;

use glam::IVec2;
use rand::Rng;

use crate::constants::{DEFAULT_BUSH_DENSITY, DEFAULT_WALL_DENSITY, MAP_SIZE, SPAWN_INSET};
use crate::error::ParseError;
use crate::map::builder::{MapBuilder, TileSink};
use crate::tile::{Tile, TilePalette};

/// A sparse tile grid keyed by cell coordinate.
///
/// Cells inside the bounds with no entry are "holes": cells whose text token
/// was malformed or whose ID had no palette slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileGrid {
    tiles: HashMap<IVec2, Tile>,
}

impl TileGrid {
    pub fn new() -> TileGrid {
        TileGrid::default()
    }

    /// Parses raw map text into a grid using the default tile palette.
    pub fn from_text(raw: &str, y_zero_at_bottom: bool) -> Result<TileGrid, ParseError> {
        let mut grid = TileGrid::new();
        MapBuilder::build(raw, y_zero_at_bottom, &TilePalette::default(), &mut grid)?;
        Ok(grid)
    }

    /// Generates a random arena of the given size.
    ///
    /// Each cell independently becomes a wall with probability `p_wall`, a
    /// bush with probability `p_bush`, and is empty otherwise. Spawn points
    /// are then placed on the vertical midline, inset from the left and right
    /// edges; on maps too narrow for the inset they clamp to the edge cells.
    /// A zero-sized map stays empty.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, h: u32, w: u32, p_wall: f32, p_bush: f32) -> TileGrid {
        let mut grid = TileGrid::new();

        for y in 0..h {
            for x in 0..w {
                let roll: f32 = rng.random();
                let tile = if roll < p_wall {
                    Tile::Wall
                } else if roll < p_wall + p_bush {
                    Tile::Bush
                } else {
                    Tile::Empty
                };
                grid.set(IVec2::new(x as i32, y as i32), tile);
            }
        }

        if h == 0 || w == 0 {
            return grid;
        }

        let mid = (h / 2) as i32;
        let col_a = SPAWN_INSET.min(w - 1);
        let col_b = w.saturating_sub(1 + SPAWN_INSET);
        grid.set(IVec2::new(col_a as i32, mid), Tile::SpawnA);
        grid.set(IVec2::new(col_b as i32, mid), Tile::SpawnB);

        grid
    }

    /// Generates a random arena with the default size and densities.
    pub fn random_default<R: Rng + ?Sized>(rng: &mut R) -> TileGrid {
        Self::random(rng, MAP_SIZE.y, MAP_SIZE.x, DEFAULT_WALL_DENSITY, DEFAULT_BUSH_DENSITY)
    }

    pub fn get(&self, pos: IVec2) -> Option<Tile> {
        self.tiles.get(&pos).copied()
    }

    pub fn set(&mut self, pos: IVec2, tile: Tile) {
        self.tiles.insert(pos, tile);
    }

    /// The inclusive min and max coordinates holding tiles, or `None` if the
    /// grid is empty.
    pub fn bounds(&self) -> Option<(IVec2, IVec2)> {
        let mut keys = self.tiles.keys();
        let first = *keys.next()?;
        Some(keys.fold((first, first), |(min, max), &pos| (min.min(pos), max.max(pos))))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates over all placed tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles.iter().map(|(&pos, &tile)| (pos, tile))
    }

    /// Renders the grid as ASCII art, row 0 first, two characters per cell.
    ///
    /// Holes inside the bounds render as `?`.
    pub fn to_ascii(&self) -> String {
        let Some((min, max)) = self.bounds() else {
            return String::new();
        };

        let mut out = String::new();
        for y in min.y..=max.y {
            if y > min.y {
                out.push('\n');
            }
            for x in min.x..=max.x {
                let glyph = self.get(IVec2::new(x, y)).map(Tile::glyph).unwrap_or('?');
                out.push(' ');
                out.push(glyph);
            }
        }
        out
    }
}

impl TileSink<Tile> for TileGrid {
    fn clear(&mut self) {
        self.tiles.clear();
    }

    fn place(&mut self, pos: IVec2, asset: Tile) {
        self.set(pos, asset);
    }
}
