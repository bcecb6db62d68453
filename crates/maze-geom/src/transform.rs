use crate::Vec3;

/// Translation, Euler rotation (degrees) and per-axis scale.
///
/// Points are scaled, then rotated about Z, X and Y in that order, then
/// translated. The frame is left-handed (Y up, Z forward), so a +90 degree
/// yaw carries +Z onto +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local space to parent space.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let r = self.rotation;
        let v = rotate_z(p.mul_elem(self.scale), r.z);
        let v = rotate_x(v, r.x);
        rotate_y(v, r.y) + self.translation
    }

    /// Parent space to local space. Zero scale components are treated as 1.
    pub fn inverse_transform_point(&self, p: Vec3) -> Vec3 {
        let r = self.rotation;
        let v = rotate_y(p - self.translation, -r.y);
        let v = rotate_x(v, -r.x);
        let v = rotate_z(v, -r.z);
        Vec3::new(
            v.x / nonzero(self.scale.x),
            v.y / nonzero(self.scale.y),
            v.z / nonzero(self.scale.z),
        )
    }
}

#[inline]
fn nonzero(s: f32) -> f32 {
    if s == 0.0 { 1.0 } else { s }
}

#[inline]
fn rotate_x(v: Vec3, deg: f32) -> Vec3 {
    if deg == 0.0 {
        return v;
    }
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

#[inline]
fn rotate_y(v: Vec3, deg: f32) -> Vec3 {
    if deg == 0.0 {
        return v;
    }
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

#[inline]
fn rotate_z(v: Vec3, deg: f32) -> Vec3 {
    if deg == 0.0 {
        return v;
    }
    let (s, c) = deg.to_radians().sin_cos();
    Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn yaw_carries_forward_onto_right() {
        let t = Transform::IDENTITY.with_rotation(Vec3::new(0.0, 90.0, 0.0));
        assert!(close(t.transform_point(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn identity_is_noop_both_ways() {
        let p = Vec3::new(1.5, -2.0, 7.25);
        assert_eq!(Transform::IDENTITY.transform_point(p), p);
        assert_eq!(Transform::IDENTITY.inverse_transform_point(p), p);
    }

    #[test]
    fn zero_scale_does_not_produce_nan() {
        let t = Transform::IDENTITY.with_scale(Vec3::new(0.0, 1.0, 1.0));
        let p = t.inverse_transform_point(Vec3::new(3.0, 0.0, 0.0));
        assert!(p.x.is_finite());
    }
}
