use brawlmap::error::{LoadError, ParseError};
use brawlmap::map::grid::TileGrid;
use brawlmap::map::loader::TilemapLoader;
use brawlmap::tile::{Tile, TilePalette};
use glam::IVec2;
use speculoos::prelude::*;

#[test]
fn test_load_missing_sink() {
    let mut loader: TilemapLoader<Tile, TileGrid> = TilemapLoader::new(TilePalette::default()).with_text("0 0");

    let result = loader.load();
    assert_that(&matches!(result, Err(LoadError::MissingGridSink))).is_true();
}

#[test]
fn test_load_missing_text() {
    let mut loader = TilemapLoader::new(TilePalette::default()).with_sink(TileGrid::new());

    let result = loader.load();
    assert_that(&matches!(result, Err(LoadError::MissingTextSource))).is_true();
}

#[test]
fn test_load_populates_sink() {
    let mut loader = TilemapLoader::default().with_text("1 0\n0 2");

    let summary = loader.load().unwrap();
    assert_that(&summary.placed).is_equal_to(4);

    // Default orientation mirrors the first line onto the top row
    let grid = loader.into_sink().unwrap();
    assert_that(&grid.get(IVec2::new(0, 1))).is_equal_to(Some(Tile::Wall));
    assert_that(&grid.get(IVec2::new(1, 0))).is_equal_to(Some(Tile::Bush));
}

#[test]
fn test_load_top_down_orientation() {
    let mut loader = TilemapLoader::default().with_text("1 0\n0 2").y_zero_at_bottom(false);

    loader.load().unwrap();

    let grid = loader.into_sink().unwrap();
    assert_that(&grid.get(IVec2::new(0, 0))).is_equal_to(Some(Tile::Wall));
}

#[test]
fn test_load_wraps_parse_errors() {
    let mut loader = TilemapLoader::default().with_text("");

    let result = loader.load();
    assert_that(&matches!(result, Err(LoadError::Parse(ParseError::EmptyInput)))).is_true();
}

#[test]
fn test_with_palette_replaces_the_mapping() {
    // Only walls keep a slot; every other ID becomes inert
    let walls_only = TilePalette::empty().assign(1, Tile::Wall);
    let mut loader = TilemapLoader::default().with_text("1 0\n0 2").with_palette(walls_only);

    let summary = loader.load().unwrap();
    assert_that(&summary.placed).is_equal_to(1);

    let grid = loader.into_sink().unwrap();
    assert_that(&grid.get(IVec2::new(0, 1))).is_equal_to(Some(Tile::Wall));
    assert_that(&grid.get(IVec2::new(1, 0))).is_equal_to(None);
}

#[test]
fn test_reload_replaces_previous_contents() {
    let mut loader = TilemapLoader::default().with_text("1 1\n1 1");
    loader.load().unwrap();
    assert_that(&loader.sink().unwrap().len()).is_equal_to(4);

    let mut loader = loader.with_text("0");
    loader.load().unwrap();
    assert_that(&loader.sink().unwrap().len()).is_equal_to(1);
}
