//! A tile world and the agents that walk it.
//!
//! [`World`] stores terrain and content per cell and implements
//! [`WalkableGrid`](tilenav_paths::WalkableGrid), so it can be searched
//! directly by a [`Pathfinder`](tilenav_paths::Pathfinder). [`Walker`] is a
//! minimal route consumer: it follows a route step by step, re-plans when
//! the world changes under it, and goes idle when its target is unreachable.

pub mod tile;
pub mod walker;
pub mod world;

pub use tile::{Content, Terrain, Tile};
pub use walker::{Step, Walker};
pub use world::World;
