//! Backpointer records and route reconstruction.

use std::collections::HashMap;

use mazepath_core::{Action, Cell};

/// An ordered sequence of actions from start to goal, with its total cost.
///
/// A zero-length route (start equals goal) has zero cost. "No route exists"
/// is expressed by the search functions returning `Ok(None)`, never by a
/// sentinel value here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub actions: Vec<Action>,
    pub cost: i32,
}

impl Route {
    /// The zero-length route.
    pub(crate) fn empty() -> Self {
        Self {
            actions: Vec::new(),
            cost: 0,
        }
    }

    /// Number of moves in the route.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the route has no moves.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The cell reached by replaying every action in order from `start`.
    pub fn replay(&self, start: Cell) -> Cell {
        self.actions.iter().fold(start, |pos, &a| a.apply(pos))
    }
}

/// How a cell was first reached, with the accumulated cost at that cell.
///
/// One record per discovered cell; the start cell never has one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Branch {
    pub(crate) parent: Cell,
    pub(crate) action: Action,
    pub(crate) cost: i32,
}

/// Rebuild the start-to-goal route from cost-tracking branch records.
///
/// Walks backwards from the goal, recording each action, until the parent is
/// the start; the collected actions are then reversed. The total cost is the
/// one recorded at the goal. Returns `None` when the goal was never
/// discovered.
pub(crate) fn rebuild(
    branches: &HashMap<Cell, Branch>,
    start: Cell,
    goal: Cell,
) -> Option<Route> {
    let cost = branches.get(&goal)?.cost;
    let mut actions = Vec::new();
    let mut current = goal;
    loop {
        let branch = branches.get(&current)?;
        actions.push(branch.action);
        if branch.parent == start {
            break;
        }
        current = branch.parent;
    }
    actions.reverse();
    Some(Route { actions, cost })
}

/// Rebuild from plain `(parent, action)` records, summing each recorded
/// action's cost along the reconstructed route.
pub(crate) fn rebuild_summing(
    branches: &HashMap<Cell, (Cell, Action)>,
    start: Cell,
    goal: Cell,
) -> Option<Route> {
    let mut actions = Vec::new();
    let mut cost = 0;
    let mut current = goal;
    loop {
        let &(parent, action) = branches.get(&current)?;
        actions.push(action);
        cost += action.cost();
        if parent == start {
            break;
        }
        current = parent;
    }
    actions.reverse();
    Some(Route { actions, cost })
}
