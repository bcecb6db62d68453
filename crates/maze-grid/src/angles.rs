//! Angle helpers shared by the yaw/pitch bucketing and rotation snapping.

use maze_geom::Vec3;

use crate::direction::Direction;

/// Wraps an angle in degrees into `(-180, 180]`.
#[inline]
pub fn normalize_degrees(deg: f32) -> f32 {
    let a = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if a <= -180.0 { a + 360.0 } else { a }
}

/// Snaps an angle to the nearest quarter turn using the horizontal yaw bands.
///
/// Results are always one of `0`, `90`, `180` or `-90`; the half-turn is
/// reported as `+180`, including for an input of exactly `-180`.
#[inline]
pub fn snap_to_90(deg: f32) -> f32 {
    Direction::horizontal_from_yaw(deg).yaw()
}

/// Applies [`snap_to_90`] to each Euler component independently.
pub fn snap_euler_to_90(rotation: Vec3) -> Vec3 {
    Vec3::new(
        snap_to_90(rotation.x),
        snap_to_90(rotation.y),
        snap_to_90(rotation.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_half_open_range() {
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(540.0), 180.0);
        assert_eq!(normalize_degrees(-200.0), 160.0);
        assert_eq!(normalize_degrees(270.0), -90.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }
}
