//! Text and JSON export formats for tile grids.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MapResult;
use crate::map::grid::TileGrid;
use crate::tile::{legend, Tile};

use std::collections::BTreeMap;

/// Writes a grid as plain map text: rows of space-separated IDs, top row
/// first, one trailing newline per row.
///
/// Holes inside the bounds serialize as `0` (empty). The output parses back
/// with `y_zero_at_bottom = false`.
pub fn write_text(grid: &TileGrid, out: &mut impl Write) -> MapResult<()> {
    let Some((min, max)) = grid.bounds() else {
        return Ok(());
    };

    for y in min.y..=max.y {
        let mut row = String::new();
        for x in min.x..=max.x {
            if x > min.x {
                row.push(' ');
            }
            let id = grid.get(IVec2::new(x, y)).unwrap_or(Tile::Empty).id();
            row.push_str(&id.to_string());
        }
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Writes a grid as map text to a file.
pub fn save_text(grid: &TileGrid, path: impl AsRef<Path>) -> MapResult<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    write_text(grid, &mut out)?;
    out.flush()?;
    debug!("Saved text map to {}", path.as_ref().display());
    Ok(())
}

/// The JSON map document: dimensions, the full ID grid, and the tile legend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapDocument {
    pub h: u32,
    pub w: u32,
    pub grid: Vec<Vec<u8>>,
    pub legend: BTreeMap<String, u8>,
}

impl MapDocument {
    /// Builds a document from a grid, normalizing coordinates so the top-left
    /// bound becomes `(0, 0)`. Holes serialize as `0`.
    pub fn from_grid(grid: &TileGrid) -> MapDocument {
        let Some((min, max)) = grid.bounds() else {
            return MapDocument {
                h: 0,
                w: 0,
                grid: Vec::new(),
                legend: legend(),
            };
        };

        let rows = (min.y..=max.y)
            .map(|y| {
                (min.x..=max.x)
                    .map(|x| grid.get(IVec2::new(x, y)).unwrap_or(Tile::Empty).id())
                    .collect()
            })
            .collect::<Vec<Vec<u8>>>();

        MapDocument {
            h: (max.y - min.y + 1) as u32,
            w: (max.x - min.x + 1) as u32,
            grid: rows,
            legend: legend(),
        }
    }

    /// Reconstructs a grid from the document, dropping unknown IDs.
    pub fn into_grid(self) -> TileGrid {
        let mut grid = TileGrid::new();
        for (y, row) in self.grid.into_iter().enumerate() {
            for (x, id) in row.into_iter().enumerate() {
                if let Some(tile) = Tile::from_id(id as i32) {
                    grid.set(IVec2::new(x as i32, y as i32), tile);
                }
            }
        }
        grid
    }
}

/// Writes a grid as a JSON map document.
pub fn write_json(grid: &TileGrid, out: &mut impl Write) -> MapResult<()> {
    serde_json::to_writer(out, &MapDocument::from_grid(grid))?;
    Ok(())
}

/// Writes a grid as a JSON map document to a file.
pub fn save_json(grid: &TileGrid, path: impl AsRef<Path>) -> MapResult<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    write_json(grid, &mut out)?;
    out.flush()?;
    debug!("Saved JSON map to {}", path.as_ref().display());
    Ok(())
}
