use std::cmp::Ordering;
use std::collections::HashMap;

use crucible_core::{Direction, Point};

/// A node of the augmented search graph: where the crucible is, which way it
/// last moved, and how many straight steps it has taken in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchState {
    pub pos: Point,
    /// `None` only for the start state, before any movement.
    pub heading: Option<Direction>,
    pub run: u32,
}

impl SearchState {
    /// The state of a crucible sitting at `pos` before its first move.
    #[inline]
    pub const fn start(pos: Point) -> Self {
        Self {
            pos,
            heading: None,
            run: 0,
        }
    }
}

/// Best known cost to a state and the state it was reached from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Label {
    pub(crate) cost: u64,
    pub(crate) parent: Option<SearchState>,
}

/// Mapping from search state to its best known label. Entries only ever
/// improve.
pub(crate) type Labels = HashMap<SearchState, Label>;

/// Frontier entry, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) cost: u64,
    pub(crate) state: SearchState,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first; the
        // state breaks ties only to stay consistent with Eq.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,
    /// Entries popped from the frontier.
    pub popped: usize,
    /// Popped entries discarded because a cheaper label was already known.
    pub stale: usize,
    /// States whose successors were generated.
    pub expanded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(cost: u64, x: i32) -> Entry {
        Entry {
            cost,
            state: SearchState::start(Point::new(x, 0)),
        }
    }

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        for (cost, x) in [(7, 0), (2, 1), (9, 2), (2, 3), (0, 4)] {
            heap.push(entry(cost, x));
        }
        let costs: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.cost)).collect();
        assert_eq!(costs, vec![0, 2, 2, 7, 9]);
    }

    #[test]
    fn states_differ_by_heading_and_run() {
        let p = Point::new(1, 1);
        let a = SearchState {
            pos: p,
            heading: Some(Direction::East),
            run: 1,
        };
        let b = SearchState { run: 2, ..a };
        let c = SearchState {
            heading: Some(Direction::South),
            ..a
        };
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, SearchState::start(p));
        let mut labels = Labels::new();
        labels.insert(a, Label { cost: 1, parent: None });
        labels.insert(b, Label { cost: 2, parent: Some(a) });
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[&b].parent, Some(a));
    }
}
