use maze_geom::Vec3;
use maze_grid::Direction;

/// Output index list a face is written to, so each can get its own material.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SurfaceGroup {
    Ceiling = 0,
    Wall = 1,
    Floor = 2,
}

impl SurfaceGroup {
    pub const ALL: [SurfaceGroup; 3] = [SurfaceGroup::Ceiling, SurfaceGroup::Wall, SurfaceGroup::Floor];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Material name used by exporters.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceGroup::Ceiling => "ceiling",
            SurfaceGroup::Wall => "wall",
            SurfaceGroup::Floor => "floor",
        }
    }

    #[inline]
    pub fn for_direction(direction: Direction) -> SurfaceGroup {
        match direction {
            Direction::Up => SurfaceGroup::Ceiling,
            Direction::Down => SurfaceGroup::Floor,
            _ => SurfaceGroup::Wall,
        }
    }
}

//           4           5
//           +-----------+
//          /|          /|          +Y
//        7/ |        6/ |           ^  +Z
//        +-----------+  |           |  /
//        | 0|    o   |  |1          | /
//        |  +--------|--+           |/
//        | /         | /            o-----> +X
//        |/          |/
//        +-----------+
//        3           2
pub(crate) const CELL_CORNERS: [(f32, f32, f32); 8] = [
    (-0.5, -0.5, 0.5),
    (0.5, -0.5, 0.5),
    (0.5, -0.5, -0.5),
    (-0.5, -0.5, -0.5),
    (-0.5, 0.5, 0.5),
    (0.5, 0.5, 0.5),
    (0.5, 0.5, -0.5),
    (-0.5, 0.5, -0.5),
];

/// Corner indices per face, in `Direction` order. Each quad winds
/// counter-clockwise when seen from inside the cell.
pub(crate) const FACE_CORNERS: [[usize; 4]; 6] = [
    [0, 4, 5, 1], // Forward
    [1, 5, 6, 2], // Right
    [2, 6, 7, 3], // Back
    [3, 7, 4, 0], // Left
    [4, 7, 6, 5], // Up
    [3, 0, 1, 2], // Down
];

pub(crate) const FACE_UVS: [(f32, f32); 4] = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];

/// Two triangles over the quad's corners.
pub(crate) const QUAD_TRIANGLES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Unit-cube corners of the face on the `direction` side.
#[inline]
pub fn face_corners(direction: Direction) -> [Vec3; 4] {
    FACE_CORNERS[direction.index()].map(|i| {
        let (x, y, z) = CELL_CORNERS[i];
        Vec3::new(x, y, z)
    })
}

/// The face's normal points back into the cell, where the maze is viewed from.
#[inline]
pub fn face_normal(direction: Direction) -> Vec3 {
    -Vec3::from(direction.offset())
}
