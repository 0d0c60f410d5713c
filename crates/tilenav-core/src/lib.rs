//! **tilenav-core** — core types for tile-grid navigation.
//!
//! This crate provides the geometry primitives and the dense [`Grid`]
//! storage shared by the path engine and the world model, plus the
//! [`GridError`] raised when a grid is built from malformed input.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{GridError, Result};
pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridIter};
