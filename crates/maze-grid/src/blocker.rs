use maze_geom::{Aabb, Transform, Vec3};

use crate::cell::{CellArena, CellId};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockerId(pub u32);

impl BlockerId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An oriented box that marks the cells inside it impassable.
///
/// `bounds` lives in the volume's local frame; `transform` places that frame
/// in maze space. Blocking never changes geometry, only traversal.
#[derive(Clone, Debug)]
pub struct BlockerVolume {
    pub bounds: Aabb,
    pub transform: Transform,
    blocking: Vec<CellId>,
    active: bool,
}

impl BlockerVolume {
    pub fn new(center: Vec3, size: Vec3, transform: Transform) -> Self {
        Self {
            bounds: Aabb::from_center_size(center, size),
            transform,
            blocking: Vec::new(),
            active: false,
        }
    }

    /// Axis-aligned box in maze space.
    pub fn axis_aligned(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size, Transform::IDENTITY)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cells currently registered against this volume.
    #[inline]
    pub fn blocking(&self) -> &[CellId] {
        &self.blocking
    }

    /// Tests a maze-space point against the box in the volume's local frame.
    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.bounds.contains(self.transform.inverse_transform_point(p))
    }

    /// Scans every cell once and registers both sides of the relation for the
    /// ones inside. Returns the number of cells now blocked by this volume.
    /// Does nothing if the volume is already active.
    pub fn activate(&mut self, id: BlockerId, cells: &mut CellArena) -> usize {
        if self.active {
            return self.blocking.len();
        }
        self.active = true;
        for (cell_id, cell) in cells.iter_mut() {
            if self.contains_point(cell.position) && cell.add_blocker(id) {
                self.blocking.push(cell_id);
            }
        }
        log::debug!(
            target: "blocker",
            "activate blocker={} cells={}",
            id.0,
            self.blocking.len()
        );
        self.blocking.len()
    }

    /// Unregisters from every blocked cell and clears the list. Cells that were
    /// removed meanwhile, or no longer reference this volume, are skipped.
    pub fn deactivate(&mut self, id: BlockerId, cells: &mut CellArena) -> usize {
        if !self.active {
            return 0;
        }
        self.active = false;
        let mut released = 0usize;
        for cell_id in self.blocking.drain(..) {
            if let Some(cell) = cells.get_mut(cell_id) {
                if cell.remove_blocker(id) {
                    released += 1;
                }
            }
        }
        log::debug!(target: "blocker", "deactivate blocker={} released={}", id.0, released);
        released
    }

    /// Drops a cell from the blocking list without touching the cell.
    #[inline]
    pub(crate) fn forget_cell(&mut self, cell: CellId) {
        self.blocking.retain(|&c| c != cell);
    }
}

/// Blocker storage with stable, never reused handles.
#[derive(Clone, Debug, Default)]
pub struct BlockerArena {
    slots: Vec<Option<BlockerVolume>>,
}

impl BlockerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an inactive volume. Use [`BlockerArena::activate`] to apply it.
    pub fn insert(&mut self, volume: BlockerVolume) -> BlockerId {
        let id = BlockerId(self.slots.len() as u32);
        self.slots.push(Some(volume));
        id
    }

    /// Deactivates, then removes the volume.
    pub fn remove(&mut self, id: BlockerId, cells: &mut CellArena) -> Option<BlockerVolume> {
        let mut volume = self.slots.get_mut(id.index())?.take()?;
        volume.deactivate(id, cells);
        Some(volume)
    }

    #[inline]
    pub fn get(&self, id: BlockerId) -> Option<&BlockerVolume> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: BlockerId) -> Option<&mut BlockerVolume> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn activate(&mut self, id: BlockerId, cells: &mut CellArena) -> Option<usize> {
        self.get_mut(id).map(|v| v.activate(id, cells))
    }

    pub fn deactivate(&mut self, id: BlockerId, cells: &mut CellArena) -> Option<usize> {
        self.get_mut(id).map(|v| v.deactivate(id, cells))
    }

    /// Scrubs a cell that is being destroyed from every blocking list.
    pub fn forget_cell(&mut self, cell: CellId) {
        for volume in self.slots.iter_mut().flatten() {
            volume.forget_cell(cell);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockerId, &BlockerVolume)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (BlockerId(i as u32), v)))
    }

    pub fn ids(&self) -> impl Iterator<Item = BlockerId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
