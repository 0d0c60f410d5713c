//! Per-cell world state: ground terrain plus whatever occupies it.

/// Ground type of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Grass,
    Sand,
    ShallowWater,
    DeepWater,
}

impl Terrain {
    /// Deep water is the only terrain agents cannot wade through.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Terrain::DeepWater)
    }
}

/// What stands on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    #[default]
    Empty,
    /// A dropped item; can be walked over.
    Item,
    /// Enemies do not block movement.
    Enemy,
    /// A constructed building or wall.
    Structure,
    /// A harvestable resource node (tree, rock, ore).
    Resource,
}

impl Content {
    #[inline]
    pub const fn blocks(self) -> bool {
        matches!(self, Content::Structure | Content::Resource)
    }
}

/// A single world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub terrain: Terrain,
    pub content: Content,
}

impl Tile {
    pub const fn new(terrain: Terrain, content: Content) -> Self {
        Self { terrain, content }
    }

    /// Whether an agent may enter this cell.
    #[inline]
    pub const fn passable(self) -> bool {
        self.terrain.passable() && !self.content.blocks()
    }

    /// Map-file glyph for this tile. Content wins over terrain.
    pub const fn glyph(self) -> char {
        match self.content {
            Content::Structure => '#',
            Content::Resource => 'T',
            Content::Item => '*',
            Content::Enemy => 'e',
            Content::Empty => match self.terrain {
                Terrain::Grass => '.',
                Terrain::Sand => ':',
                Terrain::ShallowWater => '~',
                Terrain::DeepWater => 'w',
            },
        }
    }

    /// Parse a map-file glyph. Content glyphs sit on grass.
    pub const fn from_glyph(ch: char) -> Option<Tile> {
        let tile = match ch {
            '.' => Tile::new(Terrain::Grass, Content::Empty),
            ':' => Tile::new(Terrain::Sand, Content::Empty),
            '~' => Tile::new(Terrain::ShallowWater, Content::Empty),
            'w' => Tile::new(Terrain::DeepWater, Content::Empty),
            '#' => Tile::new(Terrain::Grass, Content::Structure),
            'T' => Tile::new(Terrain::Grass, Content::Resource),
            '*' => Tile::new(Terrain::Grass, Content::Item),
            'e' => Tile::new(Terrain::Grass, Content::Enemy),
            _ => return None,
        };
        Some(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passability_rules() {
        assert!(Tile::default().passable());
        assert!(Tile::new(Terrain::ShallowWater, Content::Item).passable());
        assert!(Tile::new(Terrain::Sand, Content::Enemy).passable());
        assert!(!Tile::new(Terrain::DeepWater, Content::Empty).passable());
        assert!(!Tile::new(Terrain::Grass, Content::Structure).passable());
        assert!(!Tile::new(Terrain::Sand, Content::Resource).passable());
    }

    #[test]
    fn glyphs_round_trip() {
        for ch in ".:~w#T*e".chars() {
            let tile = Tile::from_glyph(ch).unwrap();
            assert_eq!(tile.glyph(), ch);
        }
        assert_eq!(Tile::from_glyph('?'), None);
    }
}
