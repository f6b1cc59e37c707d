//! Solves the demo maze with each frontier strategy and prints the routes.
//!
//! Run with `cargo run --example solve`.

use mazepath_core::{Cell, Grid, render};
use mazepath_search::{Euclidean, astar_path, bfs_costed_path, bfs_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from_rows(vec![
        vec![0, 1, 0, 0, 0, 0],
        vec![0, 1, 0, 0, 0, 0],
        vec![0, 1, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 1, 0],
        vec![0, 0, 0, 1, 0, 0],
    ])?;
    let start = Cell::ZERO;
    let goal = Cell::new(4, 4);

    let routes = [
        ("breadth-first", bfs_path(&grid, start, goal)?),
        ("breadth-first (costed)", bfs_costed_path(&grid, start, goal)?),
        ("cost-ordered", astar_path(&grid, start, goal, &Euclidean)?),
    ];

    for (name, route) in routes {
        match route {
            Some(route) => {
                println!("{name}: cost {}", route.cost);
                println!("{}", render(&grid, start, goal, &route.actions));
            }
            None => println!("{name}: goal unreachable"),
        }
    }

    Ok(())
}
