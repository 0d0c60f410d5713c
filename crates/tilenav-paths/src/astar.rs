use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};
use tilenav_core::Point;

use crate::adapter::GridView;
use crate::cost::Direction;
use crate::distance::euclidean;
use crate::node::FrontierEntry;
use crate::pathfinder::{Pathfinder, SearchStats};
use crate::route::Route;
use crate::traits::WalkableGrid;

/// Improvements smaller than this are summation-order noise, not a
/// cheaper route.
const COST_EPSILON: f64 = 1e-9;

impl Pathfinder {
    /// Compute the cheapest 8-connected route from `start` to `target`.
    ///
    /// Returns `None` when no route exists: either endpoint is out of bounds
    /// or unwalkable, the target is unreachable, or the configured expansion
    /// budget ran out. Returns an empty [`Route`] when `start == target`.
    ///
    /// Among routes of equal cost the result is deterministic: the frontier
    /// breaks `f` ties on the lower heuristic, then on push order.
    pub fn find_path<G: WalkableGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        target: Point,
    ) -> Option<Route> {
        self.find_path_with_stats(grid, start, target).0
    }

    /// Like [`find_path`](Self::find_path), also reporting how much work the
    /// search did.
    pub fn find_path_with_stats<G: WalkableGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        target: Point,
    ) -> (Option<Route>, SearchStats) {
        self.search(grid, start, target, |_| {})
    }

    /// The search proper. `on_expand` sees each cell as it is expanded.
    pub(crate) fn search<G: WalkableGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        target: Point,
        mut on_expand: impl FnMut(Point),
    ) -> (Option<Route>, SearchStats) {
        let mut stats = SearchStats::default();
        let view = GridView::new(grid);

        if !view.walkable(start) {
            debug!("path request rejected: start {start} is not walkable");
            return (None, stats);
        }
        if !view.walkable(target) {
            debug!("path request rejected: target {target} is not walkable");
            return (None, stats);
        }
        if start == target {
            return (Some(Route::empty()), stats);
        }

        // Per-call state only; nothing here outlives this function.
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut best_g: HashMap<Point, f64> = HashMap::new();
        let mut came_from: HashMap<Point, Point> = HashMap::new();

        best_g.insert(start, 0.0);
        open.push(FrontierEntry::new(start, 0.0, euclidean(start, target), 0));
        stats.pushed = 1;

        while let Some(current) = open.pop() {
            let recorded = best_g.get(&current.pos).copied().unwrap_or(f64::INFINITY);
            if current.g > recorded {
                stats.stale += 1;
                continue;
            }

            if current.pos == target {
                trace!(
                    "route {start} -> {target}: cost {:.3}, expanded {}, stale {}, pushed {}",
                    current.g,
                    stats.expanded,
                    stats.stale,
                    stats.pushed
                );
                let route = Route::reconstruct(&came_from, start, target, current.g);
                return (route, stats);
            }

            if let Some(limit) = self.config().max_expansions {
                if stats.expanded >= limit {
                    debug!("search {start} -> {target} gave up after {limit} expansions");
                    return (None, stats);
                }
            }
            stats.expanded += 1;
            on_expand(current.pos);

            for dir in Direction::ALL {
                let next = current.pos + dir.offset();
                if !view.walkable(next) {
                    continue;
                }
                if dir.is_diagonal() && !self.config().corner_cutting {
                    let o = dir.offset();
                    if !view.walkable(current.pos.shift(o.x, 0))
                        || !view.walkable(current.pos.shift(0, o.y))
                    {
                        continue;
                    }
                }

                let tentative = current.g + dir.cost();
                let improves = best_g.get(&next).is_none_or(|&g| tentative < g - COST_EPSILON);
                if !improves {
                    continue;
                }

                best_g.insert(next, tentative);
                came_from.insert(next, current.pos);
                open.push(FrontierEntry::new(
                    next,
                    tentative,
                    euclidean(next, target),
                    stats.pushed as u64,
                ));
                stats.pushed += 1;
            }
        }

        trace!(
            "no route {start} -> {target}: frontier exhausted after {} expansions",
            stats.expanded
        );
        (None, stats)
    }
}
