//! Error types for grid construction.
//!
//! Searching a grid never fails; only building one with malformed input does.

use crate::geom::Point;

/// Errors raised while constructing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height was zero or negative.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// Stored cells did not match the stated dimensions.
    #[error("grid has {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },

    /// Text input contained no rows, or only empty ones.
    #[error("grid source has no rows")]
    Empty,

    /// A text row differed in length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A text glyph had no cell mapping.
    #[error("unknown glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Point },
}

/// Shorthand result type for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;
