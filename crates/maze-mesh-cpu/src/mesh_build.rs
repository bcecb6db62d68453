use maze_geom::Vec3;

use crate::face::{FACE_UVS, QUAD_TRIANGLES, SurfaceGroup};

/// Shared vertex arrays plus one triangle index list per [`SurfaceGroup`].
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MazeMesh {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub groups: [Vec<u32>; 3],
}

impl MazeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.groups.iter().map(|g| g.len() / 3).sum()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.triangle_count() / 2
    }

    #[inline]
    pub fn group(&self, group: SurfaceGroup) -> &[u32] {
        &self.groups[group.index()]
    }

    /// Quads written into `group`.
    #[inline]
    pub fn group_quads(&self, group: SurfaceGroup) -> usize {
        self.group(group).len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.norm[i * 3], self.norm[i * 3 + 1], self.norm[i * 3 + 2])
    }

    #[inline]
    pub fn tex_coord(&self, i: usize) -> (f32, f32) {
        (self.uv[i * 2], self.uv[i * 2 + 1])
    }

    /// Appends a quad with four fresh vertices and two triangles in `group`.
    ///
    /// Corners must wind counter-clockwise when viewed from the side `n`
    /// points to.
    pub fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3, group: SurfaceGroup) {
        let base = self.vertex_count() as u32;
        debug_assert!(
            (corners[1] - corners[0]).cross(corners[2] - corners[0]).dot(n) > 0.0,
            "quad corners wind against normal {:?}",
            n
        );
        for (v, uv) in corners.iter().zip(FACE_UVS) {
            self.pos.extend_from_slice(&[v.x, v.y, v.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[uv.0, uv.1]);
        }
        self.groups[group.index()].extend(QUAD_TRIANGLES.iter().map(|&i| base + i));
    }

    /// Appends `other`, rebasing its indices past this mesh's vertices.
    pub fn append(&mut self, other: &MazeMesh) {
        let base = self.vertex_count() as u32;
        self.pos.extend_from_slice(&other.pos);
        self.norm.extend_from_slice(&other.norm);
        self.uv.extend_from_slice(&other.uv);
        for (dst, src) in self.groups.iter_mut().zip(&other.groups) {
            dst.extend(src.iter().map(|&i| base + i));
        }
    }
}
