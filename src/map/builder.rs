//! Map construction: placing parsed cells into a tile sink.

use glam::IVec2;
use tracing::info;

use crate::error::ParseError;
use crate::map::parser::MapTextParser;
use crate::tile::TilePalette;

/// A mutable destination for tile placements.
///
/// The sink owns its coordinate system, with `(0, 0)` at its origin. Builds
/// are full replaces: `clear` is always called before any `place`.
pub trait TileSink<A> {
    /// Removes every placed tile.
    fn clear(&mut self);

    /// Places an asset at the given cell coordinate, replacing any previous
    /// tile there.
    fn place(&mut self, pos: IVec2, asset: A);
}

/// Dimensions and placement count reported by a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// The number of rows in the parsed map.
    pub rows: usize,
    /// The number of columns in the parsed map.
    pub cols: usize,
    /// The number of `place` calls made against the sink.
    pub placed: usize,
}

/// Builder for populating a tile sink from raw map text.
pub struct MapBuilder;

impl MapBuilder {
    /// Builds a map into `sink` from raw text.
    ///
    /// The sink is cleared first, then the text is parsed and validated, then
    /// one `place` call is made for every cell whose ID has a palette slot.
    /// Cells with malformed tokens or unmapped IDs are skipped silently.
    /// Placements happen in row-major order.
    ///
    /// With `mirror_vertical`, the first text line lands on the sink's top
    /// row `rows - 1`, letting maps be authored top-down against a sink whose
    /// y origin is at the bottom.
    ///
    /// # Errors
    ///
    /// Structural failures ([`ParseError`]) abort the build after the initial
    /// clear, leaving the sink empty.
    pub fn build<A: Clone, S: TileSink<A>>(
        raw_text: &str,
        mirror_vertical: bool,
        palette: &TilePalette<A>,
        sink: &mut S,
    ) -> Result<BuildSummary, ParseError> {
        sink.clear();

        let grid = MapTextParser::parse(raw_text)?;
        let rows = grid.rows();

        let mut placed = 0;
        for (col, row, id) in grid.iter_cells() {
            let Some(asset) = id.and_then(|id| palette.get(id)) else {
                continue;
            };

            let y = if mirror_vertical { rows - 1 - row } else { row };
            sink.place(IVec2::new(col as i32, y as i32), asset.clone());
            placed += 1;
        }

        info!("Built text map: {}x{} ({placed} tiles placed)", rows, grid.cols());

        Ok(BuildSummary {
            rows,
            cols: grid.cols(),
            placed,
        })
    }
}
