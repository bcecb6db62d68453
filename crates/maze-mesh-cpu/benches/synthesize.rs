use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use maze_geom::Vec3;
use maze_grid::{CellArena, rebuild};
use maze_mesh_cpu::{synthesize, synthesize_par};

const CELL_SIZE: f32 = 3.0;

/// Hollow cube shell with a one-cell-thick wall: many open faces on both sides.
fn hollow_cube(n: i32) -> CellArena {
    let mut cells = CellArena::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let edge = [x, y, z].iter().any(|&c| c == 0 || c == n - 1);
                if edge {
                    cells.insert(maze_grid::Cell::new(
                        Vec3::new(x as f32, y as f32, z as f32) * CELL_SIZE,
                    ));
                }
            }
        }
    }
    cells
}

fn bench_graph_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_rebuild");
    let mut cells = hollow_cube(32);
    group.bench_function("hollow_32", |b| {
        b.iter(|| {
            let stats = rebuild(&mut cells, CELL_SIZE);
            black_box(stats);
        })
    });
    group.finish();
}

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");
    group.measurement_time(Duration::from_secs(8));
    let mut cells = hollow_cube(32);
    rebuild(&mut cells, CELL_SIZE);
    group.bench_function("serial_hollow_32", |b| {
        b.iter(|| black_box(synthesize(&cells, CELL_SIZE)))
    });
    group.bench_function("par_hollow_32", |b| {
        b.iter(|| black_box(synthesize_par(&cells, CELL_SIZE)))
    });
    group.finish();
}

criterion_group!(benches, bench_graph_rebuild, bench_synthesize);
criterion_main!(benches);
