//! Tile identifiers and the ID-to-asset palette.

use std::collections::{BTreeMap, HashMap};

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, FromRepr, IntoStaticStr};

/// An enum representing the different types of tiles on a map.
///
/// Discriminants are the integer IDs used in the text map format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum Tile {
    /// An empty, walkable tile.
    Empty = 0,
    /// An impassable wall tile.
    Wall = 1,
    /// A bush tile that hides entities inside it.
    Bush = 2,
    /// The spawn point for team A.
    SpawnA = 3,
    /// The spawn point for team B.
    SpawnB = 4,
    /// A power item pickup tile.
    PowerItem = 5,
}

/// The tiles a map generator is allowed to overwrite freely.
///
/// Spawn points are excluded: they are placed once and must survive mutation.
pub const MUTABLE_TILES: [Tile; 4] = [Tile::Empty, Tile::Wall, Tile::Bush, Tile::PowerItem];

impl Tile {
    /// Looks up a tile by its integer ID, returning `None` for unknown IDs.
    pub fn from_id(id: i32) -> Option<Tile> {
        u8::try_from(id).ok().and_then(Tile::from_repr)
    }

    /// The integer ID of this tile as written in map text.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// A single-character glyph for ASCII previews.
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Bush => '~',
            Tile::SpawnA => 'A',
            Tile::SpawnB => 'B',
            Tile::PowerItem => '*',
        }
    }

    /// The tile's name as used in the exported legend.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The mapping from tile names to integer IDs, as embedded in exported maps.
pub fn legend() -> BTreeMap<String, u8> {
    Tile::iter().map(|tile| (tile.name().to_string(), tile.id())).collect()
}

/// A configurable mapping from integer cell IDs to opaque asset handles.
///
/// An absent slot means "skip placement for that ID": unknown IDs are inert,
/// not errors.
#[derive(Debug, Clone)]
pub struct TilePalette<A> {
    slots: HashMap<i32, A>,
}

impl<A> TilePalette<A> {
    /// Creates an empty palette with no assigned slots.
    pub fn empty() -> Self {
        TilePalette { slots: HashMap::new() }
    }

    /// Assigns an asset handle to an integer ID, replacing any previous one.
    pub fn assign(mut self, id: i32, asset: A) -> Self {
        self.slots.insert(id, asset);
        self
    }

    /// Returns the asset handle for an ID, if one is assigned.
    pub fn get(&self, id: i32) -> Option<&A> {
        self.slots.get(&id)
    }

    /// The number of assigned slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TilePalette<Tile> {
    /// A palette mapping every known tile ID to the tile itself.
    fn default() -> Self {
        Tile::iter().fold(TilePalette::empty(), |palette, tile| {
            palette.assign(tile.id() as i32, tile)
        })
    }
}
