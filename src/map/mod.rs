//! This module defines the map pipeline: parsing raw text, building it into a
//! tile sink, the in-memory grid, the loader adapter, and export formats.

pub mod builder;
pub mod grid;
pub mod io;
pub mod loader;
pub mod parser;

pub use builder::{BuildSummary, MapBuilder, TileSink};
pub use grid::TileGrid;
pub use loader::TilemapLoader;
pub use parser::{MapTextParser, ParsedGrid};
