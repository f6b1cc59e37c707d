//! Breadth-first (FIFO) frontier strategies.

use std::collections::{HashMap, HashSet, VecDeque};

use mazepath_core::{Action, Cell, Grid};

use crate::branch::{Branch, Route, rebuild, rebuild_summing};
use crate::error::{SearchError, check_endpoints};

/// Breadth-first search from `start` to `goal`.
///
/// Cells are marked visited the moment they are discovered, so each enters
/// the frontier at most once and the search halts on any finite grid. The
/// total cost is accumulated while the route is rebuilt from the backpointer
/// map, so only moves on the returned route are counted.
///
/// Returns `Ok(None)` when the frontier empties without dequeuing the goal.
pub fn bfs_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Route>, SearchError> {
    check_endpoints(grid, start, goal)?;
    if start == goal {
        return Ok(Some(Route::empty()));
    }

    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut branches: HashMap<Cell, (Cell, Action)> = HashMap::new();

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            log::debug!("bfs: reached {goal} after discovering {} cells", visited.len());
            return Ok(rebuild_summing(&branches, start, goal));
        }
        for action in grid.valid_actions(current) {
            let next = action.apply(current);
            if visited.insert(next) {
                branches.insert(next, (current, action));
                frontier.push_back(next);
            }
        }
    }

    log::debug!("bfs: frontier exhausted, {goal} unreachable from {start}");
    Ok(None)
}

/// Breadth-first search that snapshots every discovered cell's accumulated
/// cost into the backpointer map.
///
/// Expansion order matches [`bfs_path`]; the difference is bookkeeping. Each
/// destination records its discovering parent's running cost plus the move
/// cost, and the total is read from the goal's record instead of being
/// summed during reconstruction. Under discovery-time marking a cell is
/// recorded at most once, so snapshots are never overwritten.
pub fn bfs_costed_path(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<Option<Route>, SearchError> {
    check_endpoints(grid, start, goal)?;
    if start == goal {
        return Ok(Some(Route::empty()));
    }

    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut branches: HashMap<Cell, Branch> = HashMap::new();

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            log::debug!(
                "bfs (costed): reached {goal} after discovering {} cells",
                visited.len()
            );
            return Ok(rebuild(&branches, start, goal));
        }
        // The start has no branch record; its running cost is zero.
        let cost_here = branches.get(&current).map_or(0, |b| b.cost);
        for action in grid.valid_actions(current) {
            let next = action.apply(current);
            if visited.insert(next) {
                branches.insert(
                    next,
                    Branch {
                        parent: current,
                        action,
                        cost: cost_here + action.cost(),
                    },
                );
                frontier.push_back(next);
            }
        }
    }

    log::debug!("bfs (costed): frontier exhausted, {goal} unreachable from {start}");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_equals_goal_is_an_empty_route() {
        let grid = Grid::open(3, 3).unwrap();
        let route = bfs_path(&grid, Cell::new(1, 1), Cell::new(1, 1))
            .unwrap()
            .unwrap();
        assert!(route.is_empty());
        assert_eq!(route.cost, 0);
    }

    #[test]
    fn single_step_route() {
        let grid = Grid::open(1, 2).unwrap();
        let route = bfs_path(&grid, Cell::ZERO, Cell::new(0, 1))
            .unwrap()
            .unwrap();
        assert_eq!(route.actions, vec![Action::Right]);
        assert_eq!(route.cost, 1);
    }

    #[test]
    fn routes_around_an_obstacle() {
        let grid = Grid::from_rows(vec![
            vec![0, 1, 0],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let route = bfs_path(&grid, Cell::ZERO, Cell::new(0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(route.cost, 6);
        assert_eq!(route.replay(Cell::ZERO), Cell::new(0, 2));
    }

    #[test]
    fn unreachable_goal_is_none() {
        let grid = Grid::from_rows(vec![
            vec![0, 1, 0],
            vec![1, 1, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(bfs_path(&grid, Cell::ZERO, Cell::new(2, 2)).unwrap(), None);
        assert_eq!(
            bfs_costed_path(&grid, Cell::ZERO, Cell::new(2, 2)).unwrap(),
            None
        );
    }

    #[test]
    fn costed_variant_agrees_with_plain_bfs() {
        let grid = Grid::from_rows(vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let plain = bfs_path(&grid, Cell::ZERO, Cell::new(2, 0)).unwrap().unwrap();
        let costed = bfs_costed_path(&grid, Cell::ZERO, Cell::new(2, 0))
            .unwrap()
            .unwrap();
        assert_eq!(plain, costed);
        assert_eq!(plain.cost, plain.len() as i32);
    }

    #[test]
    fn invalid_endpoints_fail_fast() {
        let grid = Grid::from_rows(vec![vec![0, 1]]).unwrap();
        assert_eq!(
            bfs_path(&grid, Cell::new(5, 5), Cell::ZERO),
            Err(SearchError::OutOfBounds(Cell::new(5, 5)))
        );
        assert_eq!(
            bfs_costed_path(&grid, Cell::ZERO, Cell::new(0, 1)),
            Err(SearchError::Blocked(Cell::new(0, 1)))
        );
    }
}
