use criterion::{criterion_group, criterion_main, Criterion};
use grid_greedy_walk::{GreedyWalker, GridBounds, Position, WalkGrid};
use std::hint::black_box;

fn walk_bench(c: &mut Criterion) {
    let walker = GreedyWalker::new();

    let open = WalkGrid::new(GridBounds::new(0, 63, 0, 63), []);
    c.bench_function("64x64 open grid, corner to corner", |b| {
        b.iter(|| {
            black_box(walker.walk(&open, Position::new(0, 0), Position::new(63, 63)))
                .unwrap();
        })
    });

    // A column of wall segments with gaps forces detours.
    let mut obstacles = Vec::new();
    for row in 0..64 {
        if row % 8 != 0 {
            obstacles.push(Position::new(row, 32));
        }
    }
    let walled = WalkGrid::new(GridBounds::new(0, 63, 0, 63), obstacles);
    c.bench_function("64x64 walled grid, corner to corner", |b| {
        b.iter(|| {
            black_box(walker.walk(&walled, Position::new(0, 0), Position::new(63, 63)));
        })
    });
}

criterion_group!(benches, walk_bench);
criterion_main!(benches);
