//! Centralized error types for the map toolkit.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for map operations.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while parsing, loading,
/// or exporting a map.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Map parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Map loading error: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type for map text parsing operations.
///
/// Structural failures only: malformed or unknown per-cell tokens are not
/// errors, they are skipped during building.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty map text: no rows after trimming")]
    EmptyInput,

    #[error("Row {row} length {actual} != {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised by the loader adapter before a build can even start.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Grid sink not assigned")]
    MissingGridSink,

    #[error("Map text not assigned")]
    MissingTextSource,

    #[error("Map parsing error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for map operations.
pub type MapResult<T> = Result<T, MapError>;
