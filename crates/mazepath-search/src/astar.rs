//! Cost-ordered (priority) frontier strategy.

use std::collections::{BinaryHeap, HashMap, HashSet};

use mazepath_core::{Cell, Grid};

use crate::branch::{Branch, Route, rebuild};
use crate::error::{SearchError, check_endpoints};
use crate::heuristic::{Heuristic, Zero};

/// Frontier entry keyed by `accumulated cost + estimate`.
#[derive(Clone, Copy, Debug)]
struct Entry {
    key: f64,
    seq: u64,
    cell: Cell,
    cost: i32,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest key; among equal keys
        // the earlier insertion wins, keeping expansion deterministic.
        other
            .key
            .total_cmp(&self.key)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Entry {}

/// Cost-ordered search from `start` to `goal`, biased by `heuristic`.
///
/// Frontier entries are ordered by accumulated cost plus the heuristic's
/// estimate of the cost remaining; popping always returns the lowest current
/// key, with insertion order breaking ties. Cells are marked visited at
/// discovery time, exactly like the FIFO strategies.
///
/// With the [`Zero`] heuristic this is uniform-cost search; see
/// [`dijkstra_path`]. A non-zero heuristic must be admissible for the
/// uniform-cost guarantees to carry over.
pub fn astar_path<H: Heuristic>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    heuristic: &H,
) -> Result<Option<Route>, SearchError> {
    check_endpoints(grid, start, goal)?;
    if start == goal {
        return Ok(Some(Route::empty()));
    }

    let mut seq = 0u64;
    let mut frontier = BinaryHeap::from([Entry {
        key: heuristic.estimate(start, goal),
        seq,
        cell: start,
        cost: 0,
    }]);
    let mut visited = HashSet::from([start]);
    let mut branches: HashMap<Cell, Branch> = HashMap::new();

    while let Some(current) = frontier.pop() {
        if current.cell == goal {
            log::debug!(
                "cost-ordered: reached {goal} at cost {} after discovering {} cells",
                current.cost,
                visited.len()
            );
            return Ok(rebuild(&branches, start, goal));
        }
        for action in grid.valid_actions(current.cell) {
            let next = action.apply(current.cell);
            if visited.insert(next) {
                let cost = current.cost + action.cost();
                branches.insert(
                    next,
                    Branch {
                        parent: current.cell,
                        action,
                        cost,
                    },
                );
                seq += 1;
                frontier.push(Entry {
                    key: f64::from(cost) + heuristic.estimate(next, goal),
                    seq,
                    cell: next,
                    cost,
                });
            }
        }
    }

    log::debug!("cost-ordered: frontier exhausted, {goal} unreachable from {start}");
    Ok(None)
}

/// Uniform-cost search: [`astar_path`] with the [`Zero`] heuristic.
pub fn dijkstra_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Route>, SearchError> {
    astar_path(grid, start, goal, &Zero)
}
