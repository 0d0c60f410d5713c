//! Frontier entries for the A* open set.
//!
//! An entry is a transient snapshot of a cell's costs at push time. Identity
//! lives in the position alone; the authoritative best cost for a position is
//! kept in the search's cost table, not here.

use std::cmp::Ordering;

use tilenav_core::Point;

#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) pos: Point,
    /// Cost of the route from the start that produced this entry.
    pub(crate) g: f64,
    /// Heuristic estimate to the target.
    pub(crate) h: f64,
    /// `g + h`.
    pub(crate) f: f64,
    /// Push order, unique within one search.
    pub(crate) seq: u64,
}

impl FrontierEntry {
    pub(crate) fn new(pos: Point, g: f64, h: f64, seq: u64) -> Self {
        Self {
            pos,
            g,
            h,
            f: g + h,
            seq,
        }
    }
}

impl Ord for FrontierEntry {
    /// `BinaryHeap` is a max-heap, so the comparison is reversed: the entry
    /// with the lowest `f` is the greatest. Ties go to the lower `h` (closer
    /// to the target), then to the earlier push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}
