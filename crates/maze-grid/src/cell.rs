use hashbrown::HashSet;
use maze_geom::{Vec3, Vec3i};

use crate::blocker::BlockerId;
use crate::direction::Direction;

/// Handle to a cell slot in a [`CellArena`]. Never reused after removal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One occupiable unit of the maze.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// Authoritative position in maze space.
    pub position: Vec3,
    neighbors: [Option<CellId>; 6],
    blockers: HashSet<BlockerId>,
}

impl Cell {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Grid coordinate, derived from `position` on every call.
    #[inline]
    pub fn grid_coord(&self, cell_size: f32) -> Vec3i {
        self.position.quantize(cell_size)
    }

    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    #[inline]
    pub fn neighbors(&self) -> &[Option<CellId>; 6] {
        &self.neighbors
    }

    /// Number of directions with a linked neighbor.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        !self.blockers.is_empty()
    }

    #[inline]
    pub fn blockers(&self) -> impl Iterator<Item = BlockerId> + '_ {
        self.blockers.iter().copied()
    }

    #[inline]
    pub fn is_blocked_by(&self, blocker: BlockerId) -> bool {
        self.blockers.contains(&blocker)
    }

    #[inline]
    pub(crate) fn set_neighbor(&mut self, direction: Direction, cell: Option<CellId>) {
        self.neighbors[direction.index()] = cell;
    }

    #[inline]
    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors = [None; 6];
    }

    #[inline]
    pub(crate) fn add_blocker(&mut self, blocker: BlockerId) -> bool {
        self.blockers.insert(blocker)
    }

    #[inline]
    pub(crate) fn remove_blocker(&mut self, blocker: BlockerId) -> bool {
        self.blockers.remove(&blocker)
    }
}

/// Order-stable cell storage. Iteration follows insertion order and skips
/// removed slots.
#[derive(Clone, Debug, Default)]
pub struct CellArena {
    slots: Vec<Option<Cell>>,
    live: usize,
}

impl CellArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: Cell) -> CellId {
        let id = CellId(self.slots.len() as u32);
        self.slots.push(Some(cell));
        self.live += 1;
        id
    }

    /// Removes a cell. Links other cells hold to it stay until the next rebuild.
    pub fn remove(&mut self, id: CellId) -> Option<Cell> {
        let cell = self.slots.get_mut(id.index())?.take();
        if cell.is_some() {
            self.live -= 1;
        }
        cell
    }

    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (CellId(i as u32), c)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CellId, &mut Cell)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, c)| c.as_mut().map(|c| (CellId(i as u32), c)))
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.iter().map(|(id, _)| id)
    }
}

impl FromIterator<Vec3> for CellArena {
    fn from_iter<T: IntoIterator<Item = Vec3>>(iter: T) -> Self {
        let mut arena = CellArena::new();
        for p in iter {
            arena.insert(Cell::new(p));
        }
        arena
    }
}
