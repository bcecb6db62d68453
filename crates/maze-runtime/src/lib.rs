//! Maze ownership, change tracking and on-demand rebuilds.
#![forbid(unsafe_code)]

use maze_geom::Vec3;
use maze_grid::graph::check_cell_size;
use maze_grid::{
    BlockerArena, BlockerId, BlockerVolume, Cell, CellArena, CellId, Direction, GraphStats,
};
use maze_mesh_cpu::MazeMesh;

/// Owns the cells, blocker volumes and the last built mesh.
///
/// Structural edits bump a revision counter; the graph and mesh are only
/// recomputed when [`Maze::rebuild`] or [`Maze::rebuild_if_dirty`] is called.
/// Blocker changes never dirty the mesh since blocking does not alter geometry.
pub struct Maze {
    cells: CellArena,
    blockers: BlockerArena,
    cell_size: f32,
    // Change-tracking
    rev: u64,
    built_rev: u64,
    mesh: MazeMesh,
    last_stats: Option<GraphStats>,
    parallel: bool,
}

impl Maze {
    /// # Panics
    /// If `cell_size` is not finite and positive.
    pub fn new(cell_size: f32) -> Self {
        check_cell_size(cell_size);
        Self {
            cells: CellArena::new(),
            blockers: BlockerArena::new(),
            cell_size,
            rev: 1,
            built_rev: 0,
            mesh: MazeMesh::new(),
            last_stats: None,
            parallel: false,
        }
    }

    /// Use the rayon mesh path for subsequent rebuilds.
    pub fn with_parallel_mesh(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn set_cell_size(&mut self, cell_size: f32) {
        check_cell_size(cell_size);
        if cell_size != self.cell_size {
            self.cell_size = cell_size;
            self.bump();
        }
    }

    #[inline]
    pub fn cells(&self) -> &CellArena {
        &self.cells
    }

    #[inline]
    pub fn blockers(&self) -> &BlockerArena {
        &self.blockers
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    // --- change tracking ---

    #[inline]
    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1).max(1);
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.rev != self.built_rev
    }

    /// Marks the maze stale without a structural edit.
    pub fn request_rebuild(&mut self) {
        self.bump();
    }

    #[inline]
    pub fn rev(&self) -> u64 {
        self.rev
    }

    // --- cells ---

    pub fn add_cell(&mut self, position: Vec3) -> CellId {
        self.bump();
        self.cells.insert(Cell::new(position))
    }

    /// Destroys a cell and drops it from every blocker that covered it.
    pub fn remove_cell(&mut self, id: CellId) -> Option<Cell> {
        let cell = self.cells.remove(id)?;
        self.blockers.forget_cell(id);
        self.bump();
        Some(cell)
    }

    /// Moves a cell. Blocker coverage is not re-evaluated; see
    /// [`Maze::refresh_blockers`].
    pub fn move_cell(&mut self, id: CellId, position: Vec3) -> bool {
        let Some(cell) = self.cells.get_mut(id) else {
            return false;
        };
        if cell.position != position {
            cell.position = position;
            self.bump();
        }
        true
    }

    // --- blockers ---

    pub fn add_blocker(&mut self, volume: BlockerVolume, active: bool) -> BlockerId {
        let id = self.blockers.insert(volume);
        if active {
            self.blockers.activate(id, &mut self.cells);
        }
        id
    }

    /// Activates or deactivates a volume. Returns the number of cells it now
    /// blocks (activation) or released (deactivation).
    pub fn set_blocker_active(&mut self, id: BlockerId, active: bool) -> Option<usize> {
        if active {
            self.blockers.activate(id, &mut self.cells)
        } else {
            self.blockers.deactivate(id, &mut self.cells)
        }
    }

    pub fn remove_blocker(&mut self, id: BlockerId) -> Option<BlockerVolume> {
        self.blockers.remove(id, &mut self.cells)
    }

    /// Re-runs activation for every active volume against current positions.
    pub fn refresh_blockers(&mut self) {
        let active: Vec<BlockerId> = self
            .blockers
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(id, _)| id)
            .collect();
        for id in active {
            self.blockers.deactivate(id, &mut self.cells);
            self.blockers.activate(id, &mut self.cells);
        }
    }

    pub fn blocked_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells
            .iter()
            .filter(|(_, c)| c.is_blocked())
            .map(|(id, _)| id)
    }

    // --- rebuild ---

    /// Rebuilds the neighbor graph and replaces the mesh, dirty or not.
    pub fn rebuild(&mut self) -> &GraphStats {
        let stats = maze_grid::rebuild(&mut self.cells, self.cell_size);
        self.mesh = if self.parallel {
            maze_mesh_cpu::synthesize_par(&self.cells, self.cell_size)
        } else {
            maze_mesh_cpu::synthesize(&self.cells, self.cell_size)
        };
        self.built_rev = self.rev;
        log::info!(
            target: "mesh",
            "rebuilt rev={} cells={} quads={} collisions={}",
            self.rev,
            stats.cells,
            self.mesh.quad_count(),
            stats.collisions.len()
        );
        self.last_stats.insert(stats)
    }

    /// Rebuilds only when a structural change is pending.
    pub fn rebuild_if_dirty(&mut self) -> Option<&GraphStats> {
        if !self.is_dirty() {
            return None;
        }
        Some(self.rebuild())
    }

    /// Mesh from the last rebuild; empty before the first one.
    #[inline]
    pub fn mesh(&self) -> &MazeMesh {
        &self.mesh
    }

    #[inline]
    pub fn last_stats(&self) -> Option<&GraphStats> {
        self.last_stats.as_ref()
    }

    // --- navigation queries ---

    #[inline]
    pub fn neighbor(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        maze_grid::neighbor(&self.cells, cell, direction)
    }

    #[inline]
    pub fn is_blocked(&self, cell: CellId) -> bool {
        maze_grid::is_blocked(&self.cells, cell)
    }

    /// Cell reached by stepping out of `cell`, unless there is no neighbor or
    /// it is blocked.
    #[inline]
    pub fn try_step(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        maze_grid::traversable_neighbor(&self.cells, cell, direction)
    }

    #[inline]
    pub fn closest_cell(&self, point: Vec3) -> Option<CellId> {
        maze_grid::closest_cell(&self.cells, point)
    }
}
