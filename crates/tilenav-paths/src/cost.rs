//! Movement cost model for 8-connected grids.
//!
//! Each of the eight directions costs its Euclidean length: `1.0` for the
//! orthogonal moves, `√2` for the diagonals. The table is computed once on
//! first use and never changes afterwards.

use std::sync::LazyLock;

use tilenav_core::Point;

/// One of the eight compass moves. `North` is `y - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

static COSTS: LazyLock<[f64; 8]> = LazyLock::new(|| {
    Direction::ALL.map(|d| {
        let o = d.offset();
        f64::from(o.x).hypot(f64::from(o.y))
    })
});

impl Direction {
    /// All directions, clockwise from north. This is also the neighbour
    /// expansion order of the search.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset of a single step.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let o = self.offset();
        o.x != 0 && o.y != 0
    }

    /// Cost of one step in this direction.
    #[inline]
    pub fn cost(self) -> f64 {
        COSTS[self as usize]
    }

    /// The direction whose offset is `delta`, if `delta` is a unit step.
    pub fn from_offset(delta: Point) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.offset() == delta)
    }
}

/// Total movement cost of walking `start` followed by `steps`.
///
/// Returns `None` if any two consecutive cells are not adjacent.
pub fn path_cost(start: Point, steps: &[Point]) -> Option<f64> {
    let mut prev = start;
    let mut total = 0.0;
    for &p in steps {
        total += Direction::from_offset(p - prev)?.cost();
        prev = p;
    }
    Some(total)
}
