//! Maze cells, blocker volumes and the six-direction neighbor graph.
//!
//! Cells and blockers live in index-addressed arenas; the cell↔blocker relation
//! is stored as handle sets on both sides, so neither owns the other.
#![forbid(unsafe_code)]

pub mod angles;
pub mod blocker;
pub mod cell;
pub mod direction;
pub mod graph;

pub use angles::{normalize_degrees, snap_euler_to_90, snap_to_90};
pub use blocker::{BlockerArena, BlockerId, BlockerVolume};
pub use cell::{Cell, CellArena, CellId};
pub use direction::{Direction, DirectionError, RelativeDirection, movement_direction};
pub use graph::{Collision, GraphStats, rebuild};

use maze_geom::Vec3;

/// Neighbor of `cell` in `direction`, or `None` at an open boundary or for a
/// removed cell.
#[inline]
pub fn neighbor(cells: &CellArena, cell: CellId, direction: Direction) -> Option<CellId> {
    cells.get(cell).and_then(|c| c.neighbor(direction))
}

/// True while at least one active blocker covers the cell.
#[inline]
pub fn is_blocked(cells: &CellArena, cell: CellId) -> bool {
    cells.get(cell).is_some_and(Cell::is_blocked)
}

/// The neighbor an agent may move into: linked, still present and not blocked.
///
/// Links to a removed cell linger until the next rebuild; they count as no
/// neighbor here.
#[inline]
pub fn traversable_neighbor(
    cells: &CellArena,
    cell: CellId,
    direction: Direction,
) -> Option<CellId> {
    neighbor(cells, cell, direction).filter(|&n| cells.contains(n) && !is_blocked(cells, n))
}

/// Cell whose position is nearest to `point`. Ties go to the earlier cell.
pub fn closest_cell(cells: &CellArena, point: Vec3) -> Option<CellId> {
    let mut best: Option<(CellId, f32)> = None;
    for (id, cell) in cells.iter() {
        let d = cell.position.distance(point);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((id, d));
        }
    }
    best.map(|(id, _)| id)
}
