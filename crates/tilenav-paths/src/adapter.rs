//! Bounds-checking adapter between the search engine and a [`WalkableGrid`].

use tilenav_core::{Point, Range};

use crate::traits::WalkableGrid;

/// Borrowed view of a grid that answers "can an agent stand here?".
///
/// A cell is walkable iff it lies within `[0, width) x [0, height)` *and* the
/// underlying grid reports it passable. Bounds are checked first, so the
/// wrapped grid is only ever asked about valid cells.
pub struct GridView<'a, G: ?Sized> {
    grid: &'a G,
    bounds: Range,
}

impl<G: ?Sized> Clone for GridView<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for GridView<'_, G> {}

impl<'a, G: WalkableGrid + ?Sized> GridView<'a, G> {
    /// Wrap `grid`, caching its bounds for the lifetime of the view.
    pub fn new(grid: &'a G) -> Self {
        Self {
            bounds: grid.bounds(),
            grid,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.grid.passable(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tilenav_core::Grid;

    /// Records every point the adapter forwards.
    struct Probe {
        seen: RefCell<Vec<Point>>,
    }

    impl WalkableGrid for Probe {
        fn size(&self) -> Point {
            Point::new(3, 3)
        }

        fn passable(&self, p: Point) -> bool {
            self.seen.borrow_mut().push(p);
            true
        }
    }

    #[test]
    fn out_of_bounds_never_reaches_the_grid() {
        let probe = Probe {
            seen: RefCell::new(Vec::new()),
        };
        let view = GridView::new(&probe);
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(3, 0),
            Point::new(0, 3),
            Point::new(i32::MIN, i32::MAX),
        ] {
            assert!(!view.walkable(p));
        }
        assert!(probe.seen.borrow().is_empty());
        assert!(view.walkable(Point::new(2, 2)));
        assert_eq!(*probe.seen.borrow(), vec![Point::new(2, 2)]);
    }

    #[test]
    fn bool_grid_walkability() {
        let mut g = Grid::new(2, 2, true).unwrap();
        g.set(Point::new(1, 0), false);
        let view = GridView::new(&g);
        assert!(view.walkable(Point::new(0, 0)));
        assert!(!view.walkable(Point::new(1, 0)));
        assert!(!view.walkable(Point::new(2, 0)));
        assert_eq!(view.bounds(), Range::sized(2, 2));
    }
}
