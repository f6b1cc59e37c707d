//! Graph-search strategies over obstacle grids.
//!
//! This crate provides the family of frontier strategies that route between
//! two cells of a [`mazepath_core::Grid`], together with the backpointer
//! bookkeeping and route reconstruction they share:
//!
//! - **Breadth-first** FIFO expansion ([`bfs_path`]), with the total cost
//!   accumulated while the route is rebuilt
//! - **Breadth-first with cost snapshots** ([`bfs_costed_path`]), which
//!   records every discovered cell's accumulated cost and reads the total
//!   from the goal's record
//! - **Cost-ordered** (priority) expansion ([`astar_path`]), optionally
//!   biased by an admissible [`Heuristic`]; [`dijkstra_path`] is the
//!   zero-heuristic uniform-cost form
//!
//! All strategies share termination semantics: success when the goal is
//! dequeued, failure (`Ok(None)`) when the frontier empties. Cells are
//! marked visited at discovery time, so each enters the frontier at most
//! once and every search halts on a finite grid.
//!
//! | Strategy | Frontier | Total cost |
//! |---|---|---|
//! | [`bfs_path`] | FIFO queue | summed during reconstruction |
//! | [`bfs_costed_path`] | FIFO queue | goal's branch record |
//! | [`astar_path`] / [`dijkstra_path`] | priority queue on `cost + estimate` | goal's branch record |

mod astar;
mod bfs;
mod branch;
mod distance;
mod error;
mod heuristic;

pub use astar::{astar_path, dijkstra_path};
pub use bfs::{bfs_costed_path, bfs_path};
pub use branch::Route;
pub use distance::{euclidean, manhattan};
pub use error::SearchError;
pub use heuristic::{Euclidean, Heuristic, Zero};
