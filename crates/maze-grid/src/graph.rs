use std::time::Instant;

use hashbrown::HashMap;
use maze_geom::Vec3i;

use crate::cell::{CellArena, CellId};
use crate::direction::Direction;

/// Two or more cells quantized onto the same grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    pub coord: Vec3i,
    /// Last registered cell at `coord`; it owns the coordinate.
    pub kept: CellId,
    /// Earlier cell at `coord`; it is left without links.
    pub shadowed: CellId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub cells: usize,
    /// Directed links; every undirected adjacency counts twice.
    pub links: usize,
    pub collisions: Vec<Collision>,
}

impl GraphStats {
    /// Undirected adjacencies, i.e. shared internal faces.
    #[inline]
    pub fn adjacencies(&self) -> usize {
        self.links / 2
    }
}

/// Asserts the configured cell size can be divided by.
#[inline]
pub fn check_cell_size(cell_size: f32) {
    assert!(
        cell_size.is_finite() && cell_size > 0.0,
        "cell_size must be finite and positive, got {}",
        cell_size
    );
}

/// Coordinate → owning cell. Later cells overwrite earlier ones.
pub fn coordinate_index(cells: &CellArena, cell_size: f32) -> (HashMap<Vec3i, CellId>, Vec<Collision>) {
    let mut index: HashMap<Vec3i, CellId> = HashMap::with_capacity(cells.len());
    let mut collisions = Vec::new();
    for (id, cell) in cells.iter() {
        let coord = cell.grid_coord(cell_size);
        if let Some(prev) = index.insert(coord, id) {
            collisions.push(Collision {
                coord,
                kept: id,
                shadowed: prev,
            });
        }
    }
    // A third cell on the same coordinate displaces the earlier winner too.
    for c in &mut collisions {
        c.kept = index[&c.coord];
    }
    (index, collisions)
}

/// Recomputes every cell's six neighbor links from current positions.
///
/// All links are cleared first, so nothing survives from a previous layout.
/// Cells that lose a coordinate collision keep no links, which keeps the
/// relation symmetric for every linked pair.
///
/// # Panics
/// If `cell_size` is not finite and positive.
pub fn rebuild(cells: &mut CellArena, cell_size: f32) -> GraphStats {
    check_cell_size(cell_size);
    let t0 = Instant::now();
    let (index, collisions) = coordinate_index(cells, cell_size);
    for c in &collisions {
        log::warn!(
            target: "graph",
            "cells {} and {} share grid coordinate {}; keeping {}",
            c.shadowed.0,
            c.kept.0,
            c.coord,
            c.kept.0
        );
    }

    let mut links = 0usize;
    for (id, cell) in cells.iter_mut() {
        cell.clear_neighbors();
        let coord = cell.grid_coord(cell_size);
        if index.get(&coord) != Some(&id) {
            continue;
        }
        for d in Direction::ALL {
            if let Some(&n) = index.get(&(coord + d.offset())) {
                cell.set_neighbor(d, Some(n));
                links += 1;
            }
        }
    }

    let stats = GraphStats {
        cells: cells.len(),
        links,
        collisions,
    };
    log::info!(
        target: "perf",
        "ms={} graph_rebuild cells={} links={} collisions={}",
        t0.elapsed().as_millis(),
        stats.cells,
        stats.links,
        stats.collisions.len()
    );
    stats
}

/// Every `(cell, direction, neighbor)` whose reverse link is missing or
/// points elsewhere. Empty after a successful [`rebuild`].
pub fn asymmetric_links(cells: &CellArena) -> Vec<(CellId, Direction, CellId)> {
    let mut out = Vec::new();
    for (id, cell) in cells.iter() {
        for d in Direction::ALL {
            if let Some(n) = cell.neighbor(d) {
                let back = cells.get(n).and_then(|nc| nc.neighbor(d.reverse()));
                if back != Some(id) {
                    out.push((id, d, n));
                }
            }
        }
    }
    out
}
