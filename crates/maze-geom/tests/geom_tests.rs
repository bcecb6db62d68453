use maze_geom::{Aabb, Transform, Vec3, Vec3i};

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
}

#[test]
fn quantize_rounds_half_to_even_on_every_axis() {
    // 1.5 and 2.5 cells: ties go to the even neighbour
    let p = Vec3::new(4.5, 7.5, -4.5);
    assert_eq!(p.quantize(3.0), Vec3i::new(2, 2, -2));
    let q = Vec3::new(1.5, -1.5, 0.5);
    assert_eq!(q.quantize(1.0), Vec3i::new(2, -2, 0));
}

#[test]
fn quantize_rounds_to_nearest() {
    let p = Vec3::new(2.9, -1.6, 4.4);
    assert_eq!(p.quantize(3.0), Vec3i::new(1, -1, 1));
}

#[test]
fn vec3i_arithmetic() {
    let a = Vec3i::new(1, -2, 3);
    assert_eq!(a + Vec3i::UP, Vec3i::new(1, -1, 3));
    assert_eq!(a - a, Vec3i::ZERO);
    assert_eq!(-Vec3i::FORWARD, Vec3i::BACK);
    assert_eq!(Vec3i::LEFT.manhattan(), 1);
    assert_eq!(format!("{}", a), "(1, -2, 3)");
}

#[test]
fn aabb_from_center_size() {
    let b = Aabb::from_center_size(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(3.0));
    assert!(vec3_approx_eq(b.min, Vec3::new(1.5, -1.5, -1.5), 1e-6));
    assert!(vec3_approx_eq(b.max, Vec3::new(4.5, 1.5, 1.5), 1e-6));
    assert!(vec3_approx_eq(b.size(), Vec3::splat(3.0), 1e-6));
    assert!(b.contains(Vec3::new(4.5, 1.5, 1.5)));
    assert!(!b.contains(Vec3::new(4.51, 0.0, 0.0)));
}

#[test]
fn inverse_transform_rotated_box_frame() {
    // Box frame yawed 90 degrees and moved to x=6: world +X is the frame's forward
    let t = Transform::from_translation(Vec3::new(6.0, 0.0, 0.0))
        .with_rotation(Vec3::new(0.0, 90.0, 0.0));
    let local = t.inverse_transform_point(Vec3::new(7.0, 0.0, 0.0));
    assert!(vec3_approx_eq(local, Vec3::new(0.0, 0.0, 1.0), 1e-5));
    let local = t.inverse_transform_point(Vec3::new(6.0, 0.0, -1.0));
    assert!(vec3_approx_eq(local, Vec3::new(1.0, 0.0, 0.0), 1e-5));
}

#[test]
fn inverse_transform_applies_scale_last() {
    let t = Transform::IDENTITY.with_scale(Vec3::new(2.0, 1.0, 0.5));
    let local = t.inverse_transform_point(Vec3::new(4.0, 4.0, 4.0));
    assert!(vec3_approx_eq(local, Vec3::new(2.0, 4.0, 8.0), 1e-6));
}

#[test]
fn cross_follows_right_handed_frame() {
    let right = Vec3::new(1.0, 0.0, 0.0);
    let up = Vec3::UP;
    let forward = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(right.cross(up), forward, 1e-6));
    assert!(vec3_approx_eq(-forward, Vec3::new(0.0, 0.0, -1.0), 1e-6));
    assert!((right.distance(forward) - 2.0f32.sqrt()).abs() < 1e-6);
}
