//! Error types for grid_route

use crate::coordinate::Coordinate;
use crate::terrain::Terrain;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Caller contract violations and malformed input. An unreachable goal is not an error:
/// searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Coordinate lies outside the map
    #[error("coordinate {coordinate} is outside the {width}x{height} map")]
    OutOfBounds {
        coordinate: Coordinate,
        width: usize,
        height: usize,
    },

    /// A cell reports a position different from the slot it is stored in
    #[error("cell stored at {slot} reports position {reported}")]
    InconsistentCell {
        slot: Coordinate,
        reported: Coordinate,
    },

    /// Map text contains a character with no terrain meaning
    #[error("unknown terrain glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },

    /// Map text rows differ in length
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// Markers can only go on open ground or on an existing marker
    #[error("cannot place a marker at {coordinate} on {terrain:?}")]
    MarkerBlocked {
        coordinate: Coordinate,
        terrain: Terrain,
    },

    /// The end marker was placed before any start marker
    #[error("an end marker needs a start marker first")]
    MissingStart,

    /// A path needs at least one coordinate
    #[error("path is empty")]
    EmptyPath,

    /// Consecutive path coordinates must be one orthogonal step apart
    #[error("path jumps from {from} to {to} at index {index}")]
    NonContiguousPath {
        index: usize,
        from: Coordinate,
        to: Coordinate,
    },

    /// A path visits the same coordinate twice
    #[error("path revisits {coordinate}")]
    RepeatedCoordinate { coordinate: Coordinate },
}
