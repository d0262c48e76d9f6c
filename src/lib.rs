//! Tile-grid map library: parse plain-text integer grids, build them into a
//! tile sink, and export them back out as text or JSON.

pub mod constants;
pub mod error;
pub mod map;
pub mod tile;
