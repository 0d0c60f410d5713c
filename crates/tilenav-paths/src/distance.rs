//! Distance functions shared by the heuristic and the tests.

use std::f64::consts::SQRT_2;

use tilenav_core::Point;

/// Euclidean (L2) distance between two points.
///
/// This is the search heuristic. It never exceeds the true 8-connected
/// movement cost and satisfies the triangle inequality against every single
/// step, so it is both admissible and consistent.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}

/// Octile distance: exact cost of the cheapest 8-connected walk between two
/// points on an obstacle-free grid (diagonal run, then orthogonal remainder).
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(lo) * SQRT_2 + f64::from(hi - lo)
}
