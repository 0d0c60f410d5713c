//! The [`Grid`] type, a dense row-major 2D array anchored at `(0, 0)`.
//!
//! A `Grid` owns its cells outright. Mutation goes through `&mut self`, so a
//! reader holding `&Grid` always sees a stable snapshot, and the type is
//! `Send + Sync` whenever `T` is.

use crate::error::{GridError, Result};
use crate::geom::{Point, Range, RangeIter};

/// A dense 2D grid of `T` values.
///
/// Deserializing runs the same checks as [`Grid::new`], and also requires
/// exactly `width * height` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: GridRepr<T>) -> Result<Self> {
        check_dims(raw.width, raw.height)?;
        let expected = (raw.width as usize) * (raw.height as usize);
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl<T: Copy> Grid<T> {
    /// Create a `width` x `height` grid filled with `fill`.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either dimension is not
    /// positive.
    pub fn new(width: i32, height: i32, fill: T) -> Result<Self> {
        check_dims(width, height)?;
        Ok(Self {
            cells: vec![fill; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    /// Create a grid whose cells are produced by `f` in row-major order.
    pub fn from_fn(width: i32, height: i32, f: impl FnMut(Point) -> T) -> Result<Self> {
        check_dims(width, height)?;
        let cells = Range::sized(width, height).iter().map(f).collect();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from text rows, mapping each character through `glyph`.
    ///
    /// Every row must have the same number of characters. Returns
    /// [`GridError::UnknownGlyph`] for the first character `glyph` rejects.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        mut glyph: impl FnMut(char) -> Option<T>,
    ) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = glyph(ch).ok_or(GridError::UnknownGlyph {
                    glyph: ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            width: expected as i32,
            height: rows.len() as i32,
        })
    }

    /// Get the cell at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).and_then(|i| self.cells.get(i).copied())
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if `p` is out
    /// of bounds.
    pub fn set(&mut self, p: Point, cell: T) -> bool {
        match self.index(p).and_then(|i| self.cells.get_mut(i)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: T) {
        self.cells.fill(cell);
    }

    /// Count the cells satisfying a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, T) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }
}

impl<T> Grid<T> {
    /// `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }
}

fn check_dims(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Iterator over `(Point, T)` pairs of a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    inner: RangeIter,
}

impl<T: Copy> Iterator for GridIter<'_, T> {
    type Item = (Point, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.at(p).map(|c| (p, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Copy> IntoIterator for &'a Grid<T> {
    type Item = (Point, T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> GridIter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5, 0u8).unwrap();
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.bounds(), Range::new(0, 0, 10, 5));
        assert_eq!(g.iter().count(), 50);
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 4, true),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(3, -1, true).is_err());
        assert!(Grid::from_fn(-2, 2, |_| 0).is_err());
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4, 0).unwrap();
        let p = Point::new(2, 3);
        assert!(g.set(p, 42));
        assert_eq!(g.at(p), Some(42));
        assert_eq!(g.at(Point::new(0, 0)), Some(0));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(-1, 2)), None);
        assert!(!g.set(Point::new(10, 10), 7));
    }

    #[test]
    fn fill_and_count() {
        let mut g = Grid::new(5, 5, 0).unwrap();
        g.fill(1);
        g.set(Point::new(0, 0), 2);
        assert_eq!(g.count_fn(|_, c| c == 1), 24);
        assert_eq!(g.count_fn(|p, c| c == 2 && p == Point::ZERO), 1);
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(3, 2, |p| p.y * 10 + p.x).unwrap();
        let vals: Vec<i32> = g.iter().map(|(_, v)| v).collect();
        assert_eq!(vals, vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn from_rows_parses_glyphs() {
        let g = Grid::from_rows(&[".#.", "..#"], |c| match c {
            '.' => Some(true),
            '#' => Some(false),
            _ => None,
        })
        .unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::new(1, 0)), Some(false));
        assert_eq!(g.at(Point::new(2, 1)), Some(false));
        assert_eq!(g.count_fn(|_, c| c), 4);
    }

    #[test]
    fn from_rows_reports_malformed_input() {
        let walk = |c: char| (c == '.').then_some(true);
        let empty: [&str; 0] = [];
        assert_eq!(Grid::from_rows(&empty, walk), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&["...", ".."], walk),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_rows(&["..", ".x"], walk),
            Err(GridError::UnknownGlyph {
                glyph: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = GridError::InvalidDimensions {
            width: 0,
            height: 3,
        };
        assert!(err.to_string().contains("0x3"));
    }
}
