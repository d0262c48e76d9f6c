//! The loader adapter: a thin shell around the builder that holds externally
//! supplied collaborators and runs one build on demand.

use crate::error::LoadError;
use crate::map::builder::{BuildSummary, MapBuilder, TileSink};
use crate::map::grid::TileGrid;
use crate::tile::{Tile, TilePalette};

/// Loads a tile map from assigned text into an assigned grid sink.
///
/// Collaborators are assigned after construction, mirroring a host runtime
/// that wires references in before triggering a load. Loading fails up front
/// if either the sink or the text is still missing.
pub struct TilemapLoader<A, S: TileSink<A>> {
    sink: Option<S>,
    text: Option<String>,
    palette: TilePalette<A>,
    y_zero_at_bottom: bool,
}

impl Default for TilemapLoader<Tile, TileGrid> {
    fn default() -> Self {
        TilemapLoader::new(TilePalette::default()).with_sink(TileGrid::new())
    }
}

impl<A: Clone, S: TileSink<A>> TilemapLoader<A, S> {
    /// Creates a loader with no sink or text assigned yet.
    ///
    /// Maps are treated as authored top-down over a bottom-origin sink
    /// (`y_zero_at_bottom` defaults to true).
    pub fn new(palette: TilePalette<A>) -> Self {
        TilemapLoader {
            sink: None,
            text: None,
            palette,
            y_zero_at_bottom: true,
        }
    }

    pub fn with_sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_palette(mut self, palette: TilePalette<A>) -> Self {
        self.palette = palette;
        self
    }

    pub fn y_zero_at_bottom(mut self, enabled: bool) -> Self {
        self.y_zero_at_bottom = enabled;
        self
    }

    /// Runs one build against the assigned sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingGridSink`] or
    /// [`LoadError::MissingTextSource`] if a collaborator was never assigned,
    /// or wraps the underlying [`ParseError`](crate::error::ParseError) when
    /// the text is structurally invalid.
    pub fn load(&mut self) -> Result<BuildSummary, LoadError> {
        let sink = self.sink.as_mut().ok_or(LoadError::MissingGridSink)?;
        let text = self.text.as_deref().ok_or(LoadError::MissingTextSource)?;

        Ok(MapBuilder::build(text, self.y_zero_at_bottom, &self.palette, sink)?)
    }

    /// The assigned sink, if any.
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Consumes the loader, returning the sink.
    pub fn into_sink(self) -> Option<S> {
        self.sink
    }
}
