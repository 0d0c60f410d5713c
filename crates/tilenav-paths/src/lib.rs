//! A* pathfinding over walkable tile grids.
//!
//! The engine computes one collision-free shortest route per request over an
//! 8-connected grid whose walkability may change between requests:
//!
//! - [`WalkableGrid`] is the read-only surface a world exposes to the engine.
//! - [`GridView`] wraps it and bounds-checks every lookup.
//! - [`Direction`] and [`euclidean`] form the cost model: orthogonal steps
//!   cost `1`, diagonal steps `√2`, and the straight-line distance is the
//!   heuristic.
//! - [`Pathfinder::find_path`] runs the search and returns a [`Route`].
//!
//! # Outcomes
//!
//! | Situation | Result |
//! |---|---|
//! | endpoint out of bounds or blocked | `None` |
//! | target unreachable | `None` |
//! | `start == target` | `Some(route)` with `route.is_empty()` |
//! | otherwise | `Some(route)`, start excluded, target included |
//!
//! Grid construction errors live in [`tilenav_core::GridError`]; searching
//! never returns an error.

mod adapter;
mod astar;
mod config;
mod cost;
mod distance;
mod node;
mod pathfinder;
mod route;
mod traits;

pub use adapter::GridView;
pub use config::SearchConfig;
pub use cost::{Direction, path_cost};
pub use distance::{euclidean, octile};
pub use pathfinder::{Pathfinder, SearchStats};
pub use route::Route;
pub use traits::WalkableGrid;
