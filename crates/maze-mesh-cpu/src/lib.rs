//! CPU mesh synthesis for maze cells: one quad per open face.
#![forbid(unsafe_code)]

mod emit;
pub mod face;
mod mesh_build;

use std::time::Instant;

use maze_grid::CellArena;
use maze_grid::graph::check_cell_size;
use rayon::prelude::*;

pub use emit::open_faces;
pub use face::{SurfaceGroup, face_corners, face_normal};
pub use mesh_build::MazeMesh;

/// Builds the maze surface from resolved neighbor links.
///
/// Cells are visited in arena order and faces in `Direction::ALL` order, so
/// identical input always yields identical vertex order. A face is emitted
/// exactly when its neighbor slot is empty; blocked cells render like any other.
///
/// # Panics
/// If `cell_size` is not finite and positive.
pub fn synthesize(cells: &CellArena, cell_size: f32) -> MazeMesh {
    check_cell_size(cell_size);
    let t0 = Instant::now();
    let mut mesh = MazeMesh::new();
    mesh.reserve_quads(cells.iter().map(|(_, c)| open_faces(c)).sum());
    for (_, cell) in cells.iter() {
        emit::emit_cell(&mut mesh, cell, cell_size);
    }
    log::info!(
        target: "perf",
        "ms={} mesh_synthesize cells={} quads={}",
        t0.elapsed().as_millis(),
        cells.len(),
        mesh.quad_count()
    );
    mesh
}

/// Parallel variant of [`synthesize`] with identical output.
///
/// Each cell writes its faces into a private buffer; buffers are then joined
/// in cell order with indices rebased.
pub fn synthesize_par(cells: &CellArena, cell_size: f32) -> MazeMesh {
    check_cell_size(cell_size);
    let t0 = Instant::now();
    let list: Vec<_> = cells.iter().map(|(_, c)| c).collect();
    let parts: Vec<MazeMesh> = list
        .par_iter()
        .map(|cell| {
            let mut part = MazeMesh::new();
            part.reserve_quads(open_faces(cell));
            emit::emit_cell(&mut part, cell, cell_size);
            part
        })
        .collect();
    let mut mesh = MazeMesh::new();
    mesh.reserve_quads(parts.iter().map(MazeMesh::quad_count).sum());
    for part in &parts {
        mesh.append(part);
    }
    log::info!(
        target: "perf",
        "ms={} mesh_synthesize_par cells={} quads={}",
        t0.elapsed().as_millis(),
        cells.len(),
        mesh.quad_count()
    );
    mesh
}
