use std::collections::BinaryHeap;
use std::collections::hash_map::Entry as Slot;

use crucible_core::{CostGrid, Direction, GridError, Point};

use crate::state::{Entry, Label, Labels, SearchState, SearchStats};
use crate::traits::MovePolicy;

/// A minimum-cost route found by [`shortest_route`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Sum of the entry costs of every cell after the start.
    pub cost: u64,
    /// Every visited cell, start and goal included.
    pub path: Vec<Point>,
    pub stats: SearchStats,
}

impl Route {
    /// Number of unit moves along the route.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Each entered cell paired with the direction of the move into it.
    pub fn moves(&self) -> impl Iterator<Item = (Point, Direction)> + '_ {
        self.path
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]).map(|d| (w[1], d)))
    }
}

/// Minimum total cost of moving from `start` to `goal` under `policy`.
///
/// Returns `Ok(None)` when no legal route exists, and fails only if `start`
/// or `goal` lies outside the grid.
pub fn shortest_cost<P: MovePolicy>(
    grid: &CostGrid,
    start: Point,
    goal: Point,
    policy: &P,
) -> Result<Option<u64>, GridError> {
    grid.cost(start)?;
    grid.cost(goal)?;
    Ok(explore(grid, start, goal, policy).found.map(|e| e.cost))
}

/// Like [`shortest_cost`], but also reconstructs one optimal route.
pub fn shortest_route<P: MovePolicy>(
    grid: &CostGrid,
    start: Point,
    goal: Point,
    policy: &P,
) -> Result<Option<Route>, GridError> {
    grid.cost(start)?;
    grid.cost(goal)?;
    Ok(explore(grid, start, goal, policy).into_route())
}

/// Minimum cost from the top-left to the bottom-right cell.
pub fn solve_corners<P: MovePolicy>(grid: &CostGrid, policy: &P) -> Option<u64> {
    explore(grid, grid.top_left(), grid.bottom_right(), policy)
        .found
        .map(|e| e.cost)
}

/// Result of one exhaustive search: the label set, the counters and the
/// goal entry if one was accepted.
struct Search {
    labels: Labels,
    stats: SearchStats,
    found: Option<Entry>,
}

impl Search {
    fn into_route(self) -> Option<Route> {
        let goal = self.found?;
        let mut path = Vec::new();
        let mut cur = Some(goal.state);
        while let Some(state) = cur {
            path.push(state.pos);
            cur = self.labels.get(&state).and_then(|l| l.parent);
        }
        path.reverse();
        Some(Route {
            cost: goal.cost,
            path,
            stats: self.stats,
        })
    }
}

/// Dijkstra over `(position, heading, run)` states.
///
/// Labels are recorded when an entry is pushed; the heap cannot decrease a
/// key in place, so superseded entries are filtered when popped.
fn explore<P: MovePolicy>(grid: &CostGrid, start: Point, goal: Point, policy: &P) -> Search {
    let mut labels = Labels::new();
    let mut stats = SearchStats::default();
    let mut open: BinaryHeap<Entry> = BinaryHeap::new();

    let seed = SearchState::start(start);
    labels.insert(
        seed,
        Label {
            cost: 0,
            parent: None,
        },
    );
    open.push(Entry {
        cost: 0,
        state: seed,
    });
    stats.pushed += 1;

    let mut found = None;
    while let Some(current) = open.pop() {
        stats.popped += 1;
        let Entry { cost, state } = current;

        if labels.get(&state).is_some_and(|l| cost > l.cost) {
            stats.stale += 1;
            log::trace!("skipping stale entry {state:?} at cost {cost}");
            continue;
        }

        if state.pos == goal && policy.can_stop(state.run) {
            found = Some(current);
            break;
        }

        stats.expanded += 1;
        for d in Direction::ALL {
            let Some(run) = policy.next_run(state.heading, state.run, d) else {
                continue;
            };
            let pos = state.pos.step(d);
            let Some(enter) = grid.get(pos) else {
                continue;
            };
            let next = SearchState {
                pos,
                heading: Some(d),
                run,
            };
            let tentative = cost + u64::from(enter);
            let label = Label {
                cost: tentative,
                parent: Some(state),
            };
            match labels.entry(next) {
                Slot::Occupied(mut slot) => {
                    if tentative >= slot.get().cost {
                        continue;
                    }
                    slot.insert(label);
                }
                Slot::Vacant(slot) => {
                    slot.insert(label);
                }
            }
            open.push(Entry {
                cost: tentative,
                state: next,
            });
            stats.pushed += 1;
        }
    }

    match found {
        Some(e) => log::debug!(
            "route {start} -> {goal}: cost {} ({} labels, {stats:?})",
            e.cost,
            labels.len()
        ),
        None => log::debug!(
            "route {start} -> {goal}: unreachable ({} labels, {stats:?})",
            labels.len()
        ),
    }

    Search {
        labels,
        stats,
        found,
    }
}
