use maze_geom::Vec3;
use maze_grid::{Cell, Direction};

use crate::face::{SurfaceGroup, face_corners, face_normal};
use crate::mesh_build::MazeMesh;

#[inline]
/// Emits one face of a cell, scaled by `cell_size` around `center`.
pub(crate) fn emit_face(mesh: &mut MazeMesh, direction: Direction, center: Vec3, cell_size: f32) {
    let corners = face_corners(direction).map(|c| center + c * cell_size);
    mesh.add_quad(
        corners,
        face_normal(direction),
        SurfaceGroup::for_direction(direction),
    );
}

#[inline]
/// Emits every face of `cell` that has no neighbor, in `Direction::ALL` order.
/// Blocked state is not consulted. Returns the number of quads written.
pub(crate) fn emit_cell(mesh: &mut MazeMesh, cell: &Cell, cell_size: f32) -> usize {
    let mut quads = 0usize;
    for d in Direction::ALL {
        if cell.neighbor(d).is_none() {
            emit_face(mesh, d, cell.position, cell_size);
            quads += 1;
        }
    }
    quads
}

/// Number of open faces a cell will emit.
#[inline]
pub fn open_faces(cell: &Cell) -> usize {
    6 - cell.link_count()
}
