//! The occupancy [`Grid`] — a dense, immutable obstacle matrix.

use crate::action::Action;
use crate::error::GridError;
use crate::geom::Cell;

/// A rectangular obstacle grid.
///
/// Built once and then read-only: searches take `&Grid`, the storage is a
/// flat owned buffer with no interior mutability, and the type is
/// `Send + Sync`, so concurrent searches over the same grid are safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    /// Row-major; `true` marks an obstacle.
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid from rows of `{0, 1}` values: `0` is traversable, any
    /// other value an obstacle.
    ///
    /// Fails on empty input and on ragged rows; a malformed grid is never
    /// silently truncated.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }

        Ok(Self {
            rows: height as i32,
            cols: width as i32,
            cells,
        })
    }

    /// An obstacle-free grid of the given dimensions.
    pub fn open(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; (rows * cols) as usize],
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `c` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Whether `c` holds an obstacle. Out-of-bounds cells report `false`;
    /// use [`is_open`](Grid::is_open) to ask for traversability.
    #[inline]
    pub fn is_obstacle(&self, c: Cell) -> bool {
        self.contains(c) && self.cells[self.index(c)]
    }

    /// Whether `c` is within bounds and traversable.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.contains(c) && !self.cells[self.index(c)]
    }

    /// The actions that may be taken from `from`: each of the four moves
    /// whose destination is within bounds and not an obstacle.
    pub fn valid_actions(&self, from: Cell) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .into_iter()
            .filter(move |a| self.is_open(a.apply(from)))
    }

    #[inline]
    fn index(&self, c: Cell) -> usize {
        (c.row * self.cols + c.col) as usize
    }
}
