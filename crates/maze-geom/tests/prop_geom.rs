use maze_geom::{Aabb, Transform, Vec3, Vec3i};
use proptest::prelude::*;

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
}

fn coord() -> impl Strategy<Value = i32> {
    -500i32..500
}

fn arb_vec3i() -> impl Strategy<Value = Vec3i> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3i::new(x, y, z))
}

fn small_vec3() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn angle_vec3() -> impl Strategy<Value = Vec3> {
    (-360.0f32..360.0, -360.0f32..360.0, -360.0f32..360.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn scale_vec3() -> impl Strategy<Value = Vec3> {
    (0.25f32..4.0, 0.25f32..4.0, 0.25f32..4.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // A cell placed exactly on its lattice point quantizes back to that point
    #[test]
    fn quantize_lattice_points(g in arb_vec3i(), size in 1u8..16) {
        let size = size as f32;
        let p = Vec3::from(g) * size;
        prop_assert_eq!(p.quantize(size), g);
    }

    // Jitter below half a cell never changes the coordinate
    #[test]
    fn quantize_absorbs_small_jitter(
        g in arb_vec3i(),
        jx in -0.45f32..0.45,
        jy in -0.45f32..0.45,
        jz in -0.45f32..0.45,
    ) {
        let size = 3.0;
        let p = Vec3::from(g) * size + Vec3::new(jx, jy, jz) * size;
        prop_assert_eq!(p.quantize(size), g);
    }

    // inverse_transform_point undoes transform_point
    #[test]
    fn transform_roundtrip(p in small_vec3(), t in small_vec3(), r in angle_vec3(), s in scale_vec3()) {
        let xf = Transform::from_translation(t).with_rotation(r).with_scale(s);
        let back = xf.inverse_transform_point(xf.transform_point(p));
        prop_assert!(vapprox(back, p, 2e-2));
    }

    // A box contains its own center and corners
    #[test]
    fn aabb_contains_center_and_corners(c in small_vec3(), s in scale_vec3()) {
        let b = Aabb::from_center_size(c, s);
        prop_assert!(b.contains(b.center()));
        prop_assert!(b.contains(b.min));
        prop_assert!(b.contains(b.max));
    }

    // Pushing a point one full size outside along any axis leaves the box
    #[test]
    fn aabb_rejects_outside(c in small_vec3(), s in scale_vec3()) {
        let b = Aabb::from_center_size(c, s);
        prop_assert!(!b.contains(c + Vec3::new(s.x, 0.0, 0.0)));
        prop_assert!(!b.contains(c - Vec3::new(0.0, s.y, 0.0)));
        prop_assert!(!b.contains(c + Vec3::new(0.0, 0.0, s.z)));
    }
}
