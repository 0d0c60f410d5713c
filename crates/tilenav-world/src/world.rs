//! The tile world: a [`Grid`] of [`Tile`]s exposed to the path engine.

use std::fmt;

use log::debug;
use tilenav_core::{Grid, Point, Range, Result};
use tilenav_paths::WalkableGrid;

use crate::tile::{Content, Terrain, Tile};

/// A rectangular world of terrain and content.
///
/// Edits take `&mut self`, so they cannot overlap a search that borrows the
/// world.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    tiles: Grid<Tile>,
}

impl World {
    /// An all-grass world. Fails if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self {
            tiles: Grid::new(width, height, Tile::default())?,
        })
    }

    /// Parse a world from glyph rows (see [`Tile::from_glyph`]).
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Ok(Self {
            tiles: Grid::from_rows(rows, Tile::from_glyph)?,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.tiles.bounds()
    }

    /// The tile at `p`, or `None` outside the world.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.tiles.at(p)
    }

    /// Change the ground at `p`. Returns `false` outside the world.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) -> bool {
        let Some(mut tile) = self.tiles.at(p) else {
            return false;
        };
        tile.terrain = terrain;
        self.tiles.set(p, tile)
    }

    /// Put `content` on `p`, replacing whatever was there. Returns `false`
    /// outside the world.
    pub fn place(&mut self, p: Point, content: Content) -> bool {
        let Some(mut tile) = self.tiles.at(p) else {
            return false;
        };
        if content.blocks() {
            debug!("{content:?} placed at {p}, cell no longer walkable");
        }
        tile.content = content;
        self.tiles.set(p, tile)
    }

    /// Remove the content at `p` (demolish, harvest, pick up).
    pub fn clear(&mut self, p: Point) -> bool {
        self.place(p, Content::Empty)
    }
}

impl WalkableGrid for World {
    #[inline]
    fn size(&self) -> Point {
        self.tiles.size()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.tiles.at(p).is_some_and(Tile::passable)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        for y in b.min.y..b.max.y {
            for x in b.min.x..b.max.x {
                let ch = self.tiles.at(Point::new(x, y)).map_or(' ', Tile::glyph);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
