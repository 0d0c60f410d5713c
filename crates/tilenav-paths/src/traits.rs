use tilenav_core::{Grid, Point, Range};

/// Read-only walkability surface consumed by the path engine.
///
/// Implementors describe a grid occupying `[0, width) x [0, height)` and
/// report whether an in-bounds cell can currently be entered. The engine
/// never calls [`passable`](WalkableGrid::passable) with an out-of-bounds
/// point; it goes through [`GridView`](crate::GridView), which checks bounds
/// first.
pub trait WalkableGrid {
    /// Grid size as a `Point` (x = width, y = height).
    fn size(&self) -> Point;

    /// Whether the in-bounds cell `p` can be entered.
    fn passable(&self, p: Point) -> bool;

    /// `[0, width) x [0, height)`.
    #[inline]
    fn bounds(&self) -> Range {
        let s = self.size();
        Range::sized(s.x, s.y)
    }
}

/// A boolean grid where `true` marks a walkable cell.
impl WalkableGrid for Grid<bool> {
    #[inline]
    fn size(&self) -> Point {
        Grid::size(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.at(p).unwrap_or(false)
    }
}
