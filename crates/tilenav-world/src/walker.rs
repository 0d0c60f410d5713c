//! Route following for a single agent.
//!
//! A [`Walker`] asks the path engine for a route, then advances one cell per
//! [`step`](Walker::step). The engine caches nothing, so staleness is the
//! walker's problem: if the next cell on its route has become blocked since
//! the route was planned, it plans again from where it stands.

use std::collections::VecDeque;

use log::debug;
use tilenav_core::Point;
use tilenav_paths::{GridView, Pathfinder, WalkableGrid};

/// Result of one [`Walker::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No target set.
    Idle,
    /// Moved to the given cell, target not reached yet.
    Moved(Point),
    /// Standing on the target; the target has been cleared.
    Arrived(Point),
    /// No route to the target exists right now. The target has been dropped
    /// and the walker is idle.
    ///
    /// This is also reported when the walker has to plan while its own cell is
    /// blocked, since the engine rejects a blocked start. The walker stays put.
    Unreachable,
}

/// An agent that walks toward a target along engine-provided routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    pos: Point,
    target: Option<Point>,
    route: VecDeque<Point>,
}

impl Walker {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            target: None,
            route: VecDeque::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Remaining cells of the current plan, next cell first.
    pub fn route(&self) -> impl Iterator<Item = Point> + '_ {
        self.route.iter().copied()
    }

    /// Head for `target`, discarding any previous plan.
    pub fn set_target(&mut self, target: Point) {
        self.target = Some(target);
        self.route.clear();
    }

    /// Advance one cell toward the target, re-planning when needed.
    pub fn step<G: WalkableGrid + ?Sized>(&mut self, grid: &G, finder: &Pathfinder) -> Step {
        let Some(target) = self.target else {
            return Step::Idle;
        };
        if self.pos == target {
            self.target = None;
            self.route.clear();
            return Step::Arrived(self.pos);
        }

        let view = GridView::new(grid);
        let stale = self.route.front().is_none_or(|&next| !view.walkable(next));
        if stale {
            if !self.route.is_empty() {
                debug!("route from {} to {target} blocked, re-planning", self.pos);
            }
            match finder.find_path(grid, self.pos, target) {
                Some(route) => self.route = route.into_steps().into(),
                None => {
                    debug!("{target} unreachable from {}, going idle", self.pos);
                    self.target = None;
                    self.route.clear();
                    return Step::Unreachable;
                }
            }
        }

        let Some(next) = self.route.pop_front() else {
            // An empty plan here means the target is the current cell.
            self.target = None;
            return Step::Arrived(self.pos);
        };
        self.pos = next;
        if next == target {
            self.target = None;
            self.route.clear();
            Step::Arrived(next)
        } else {
            Step::Moved(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Content;
    use crate::world::World;

    fn walk_until_done(w: &mut Walker, world: &World, finder: &Pathfinder) -> Vec<Step> {
        let mut steps = Vec::new();
        for _ in 0..100 {
            let s = w.step(world, finder);
            steps.push(s);
            if !matches!(s, Step::Moved(_)) {
                break;
            }
        }
        steps
    }

    #[test]
    fn idle_without_target() {
        let world = World::new(3, 3).unwrap();
        let mut w = Walker::new(Point::new(1, 1));
        assert_eq!(w.step(&world, &Pathfinder::default()), Step::Idle);
    }

    #[test]
    fn walks_to_target_and_arrives() {
        let world = World::new(5, 5).unwrap();
        let finder = Pathfinder::default();
        let mut w = Walker::new(Point::new(0, 0));
        w.set_target(Point::new(4, 2));
        let steps = walk_until_done(&mut w, &world, &finder);
        assert_eq!(steps.last(), Some(&Step::Arrived(Point::new(4, 2))));
        assert_eq!(steps.len(), 4);
        assert_eq!(w.pos(), Point::new(4, 2));
        assert_eq!(w.target(), None);
        assert_eq!(w.step(&world, &finder), Step::Idle);
    }

    #[test]
    fn target_at_current_cell_arrives_immediately() {
        let world = World::new(3, 3).unwrap();
        let mut w = Walker::new(Point::new(2, 2));
        w.set_target(Point::new(2, 2));
        assert_eq!(
            w.step(&world, &Pathfinder::default()),
            Step::Arrived(Point::new(2, 2))
        );
    }

    #[test]
    fn replans_when_next_cell_is_built_over() {
        let mut world = World::new(6, 3).unwrap();
        let finder = Pathfinder::default();
        let mut w = Walker::new(Point::new(0, 1));
        w.set_target(Point::new(5, 1));

        assert_eq!(w.step(&world, &finder), Step::Moved(Point::new(1, 1)));
        let next = w.route().next().unwrap();
        assert_eq!(next, Point::new(2, 1));

        world.place(next, Content::Structure);
        let s = w.step(&world, &finder);
        assert!(matches!(s, Step::Moved(p) if p != next));
        assert!(w.route().all(|p| world.tile(p).is_some_and(|t| t.passable())));

        let steps = walk_until_done(&mut w, &world, &finder);
        assert_eq!(steps.last(), Some(&Step::Arrived(Point::new(5, 1))));
    }

    #[test]
    fn gives_up_when_walled_off() {
        let mut world = World::from_ascii(&[
            "..#..", //
            "..#..", //
            ".....",
        ])
        .unwrap();
        let finder = Pathfinder::default();
        let mut w = Walker::new(Point::new(0, 0));
        w.set_target(Point::new(4, 0));
        assert!(matches!(w.step(&world, &finder), Step::Moved(_)));

        world.place(Point::new(2, 2), Content::Structure);
        // Either the cached route is now blocked, or it will be soon; the
        // walker must end idle without crossing the wall.
        let steps = walk_until_done(&mut w, &world, &finder);
        assert_eq!(steps.last(), Some(&Step::Unreachable));
        assert_eq!(w.target(), None);
        assert!(w.pos().x < 2);
    }

    #[test]
    fn unreachable_target_goes_idle() {
        let world = World::from_ascii(&[".w.", "www", "..."]).unwrap();
        let mut w = Walker::new(Point::new(0, 0));
        w.set_target(Point::new(2, 2));
        assert_eq!(w.step(&world, &Pathfinder::default()), Step::Unreachable);
        assert_eq!(w.target(), None);
        assert_eq!(w.pos(), Point::new(0, 0));
    }

    #[test]
    fn planning_from_a_blocked_cell_is_unreachable() {
        let mut world = World::new(5, 3).unwrap();
        let finder = Pathfinder::default();
        let mut w = Walker::new(Point::new(0, 1));
        w.set_target(Point::new(4, 1));
        assert_eq!(w.step(&world, &finder), Step::Moved(Point::new(1, 1)));

        // A still-walkable plan is followed off the blocked cell.
        world.place(w.pos(), Content::Structure);
        assert_eq!(w.step(&world, &finder), Step::Moved(Point::new(2, 1)));

        // A fresh plan has to start from the blocked cell and cannot.
        world.place(w.pos(), Content::Structure);
        w.set_target(Point::new(4, 1));
        assert_eq!(w.step(&world, &finder), Step::Unreachable);
        assert_eq!(w.target(), None);
        assert_eq!(w.pos(), Point::new(2, 1));
        assert_eq!(w.route().count(), 0);
    }
}
