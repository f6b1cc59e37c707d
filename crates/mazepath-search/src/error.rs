//! Search precondition errors.

use mazepath_core::{Cell, Grid};
use thiserror::Error;

/// Rejected start/goal input.
///
/// An unreachable goal is not an error; searches signal that case by
/// returning `Ok(None)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The cell lies outside the grid bounds.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    /// The cell is an obstacle.
    #[error("cell {0} is an obstacle")]
    Blocked(Cell),
}

/// Fail fast when either endpoint is off-grid or sits on an obstacle.
pub(crate) fn check_endpoints(grid: &Grid, start: Cell, goal: Cell) -> Result<(), SearchError> {
    for cell in [start, goal] {
        if !grid.contains(cell) {
            return Err(SearchError::OutOfBounds(cell));
        }
        if grid.is_obstacle(cell) {
            return Err(SearchError::Blocked(cell));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_offending_cell() {
        let grid = Grid::from_rows(vec![vec![0, 1]]).unwrap();
        assert_eq!(
            check_endpoints(&grid, Cell::new(0, 9), Cell::ZERO),
            Err(SearchError::OutOfBounds(Cell::new(0, 9)))
        );
        assert_eq!(
            check_endpoints(&grid, Cell::ZERO, Cell::new(0, 1)),
            Err(SearchError::Blocked(Cell::new(0, 1)))
        );
        assert_eq!(check_endpoints(&grid, Cell::ZERO, Cell::ZERO), Ok(()));
    }

    #[test]
    fn error_messages_name_the_cell() {
        assert_eq!(
            SearchError::Blocked(Cell::new(2, 3)).to_string(),
            "cell (2, 3) is an obstacle"
        );
    }
}
