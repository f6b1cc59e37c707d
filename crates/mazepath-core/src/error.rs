//! Error types for grid construction.

use thiserror::Error;

/// Rejected grid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input had no rows, or rows with no columns.
    #[error("grid must be at least 1x1")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("ragged grid: row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}
