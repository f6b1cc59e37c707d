use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mazepath_core::{Cell, Grid};
use mazepath_search::{Euclidean, astar_path, bfs_costed_path, bfs_path, dijkstra_path};

fn bench_corner_to_corner(c: &mut Criterion, side: i32) {
    let grid = Grid::open(side, side).unwrap();
    let start = Cell::ZERO;
    let goal = Cell::new(side - 1, side - 1);

    let mut group = c.benchmark_group(format!("open_{side}x{side}"));
    group.bench_function("bfs", |b| {
        b.iter(|| bfs_path(black_box(&grid), black_box(start), black_box(goal)))
    });
    group.bench_function("bfs_costed", |b| {
        b.iter(|| bfs_costed_path(black_box(&grid), black_box(start), black_box(goal)))
    });
    group.bench_function("dijkstra", |b| {
        b.iter(|| dijkstra_path(black_box(&grid), black_box(start), black_box(goal)))
    });
    group.bench_function("astar_euclidean", |b| {
        b.iter(|| {
            astar_path(
                black_box(&grid),
                black_box(start),
                black_box(goal),
                &Euclidean,
            )
        })
    });
    group.finish();
}

pub fn open_small(c: &mut Criterion) {
    bench_corner_to_corner(c, 16);
}

pub fn open_large(c: &mut Criterion) {
    bench_corner_to_corner(c, 64);
}

criterion_group!(benches, open_small, open_large);
criterion_main!(benches);
