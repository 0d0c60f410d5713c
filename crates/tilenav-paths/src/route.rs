use std::collections::HashMap;

use tilenav_core::Point;

/// An ordered walk produced by a successful search.
///
/// `steps` runs from the cell just after the start up to and including the
/// target; the start itself is never included. An empty route means the
/// caller is already standing on the target.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    steps: Vec<Point>,
    cost: f64,
}

impl Route {
    /// The zero-length route ("already there").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Walk the predecessor table back from `target` to `start`.
    ///
    /// Returns `None` if the chain is broken before reaching `start`.
    pub(crate) fn reconstruct(
        came_from: &HashMap<Point, Point>,
        start: Point,
        target: Point,
        cost: f64,
    ) -> Option<Self> {
        let mut steps = Vec::new();
        let mut cur = target;
        while cur != start {
            steps.push(cur);
            cur = *came_from.get(&cur)?;
        }
        steps.reverse();
        Some(Self { steps, cost })
    }

    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of steps (cells entered).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total movement cost of the route.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The next cell to enter.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    /// The target, unless the route is empty.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for Route {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
